use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Small employee-salaries style frame: columns 0..=5 are non-numeric,
/// columns 6 and 7 are numeric.
pub fn employee_frame() -> DataFrame {
    df!(
        "department" => ["POL", "FRS", "HHS", "POL", "LIB", "HHS", "POL", "FRS", "HHS", "POL"],
        "division" => [
            "Patrol", "Rescue", "Clinic", "Traffic", "Branch",
            "Clinic", "Patrol", "Rescue", "Admin", "Traffic"
        ],
        "assignment_category" => [
            "Fulltime", "Fulltime", "Parttime", "Fulltime", "Parttime",
            "Fulltime", "Fulltime", "Fulltime", "Parttime", "Fulltime"
        ],
        "position_title" => [
            "Officer", "Firefighter", "Nurse", "Officer", "Librarian",
            "Nurse", "Sergeant", "Captain", "Clerk", "Officer"
        ],
        "gender" => ["M", "F", "F", "M", "F", "M", "F", "M", "F", "M"],
        "underfilled" => [false, false, true, false, false, true, false, false, false, false],
        "year_first_hired" => [1986i32, 1988, 1989, 1995, 2001, 2007, 2011, 1998, 2014, 2016],
        "current_annual_salary" => [
            69222.18f64, 97392.47, 104717.28, 52734.57, 93396.00,
            66619.84, 78902.10, 122406.31, 43561.72, 55148.95
        ]
    )
    .unwrap()
}

/// Write the employee frame as CSV under `dir` and return its path.
#[allow(dead_code)]
pub fn write_employee_csv(dir: &Path) -> PathBuf {
    let path = dir.join("employee_salaries.csv");
    let mut df = employee_frame();
    let mut file = File::create(&path).unwrap();
    CsvWriter::new(&mut file).finish(&mut df).unwrap();
    path
}
