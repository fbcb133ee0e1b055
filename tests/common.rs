#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use tempfile::TempDir;

pub fn rp() -> Command {
    let mut cmd = cargo_bin_cmd!("rafflepick");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Per-test scratch directory; everything in it is removed on drop.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("rafflepick_test_")
            .tempdir()
            .expect("create temp dir");
        Self { dir }
    }

    /// Absolute path of `file` inside the scratch directory
    pub fn path(&self, file: &str) -> String {
        self.dir.path().join(file).to_string_lossy().to_string()
    }

    /// Path for a test DB (not created)
    pub fn db(&self) -> String {
        self.path("rafflepick.sqlite")
    }

    /// Path for an export output file (not created)
    pub fn out(&self, name: &str, ext: &str) -> String {
        self.path(&format!("{name}_out.{ext}"))
    }

    /// Write `content` to a CSV file and return its path
    pub fn csv(&self, content: &str) -> String {
        let path = self.path("participants.csv");
        fs::write(&path, content).expect("write csv");
        path
    }
}

/// Initialize a test DB through the CLI (no config file written)
pub fn init_db(db_path: &str) {
    rp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub const DONOR_CSV: &str = "\
PaymentID,Donor Name,First Name,Last Name,Email,Date,Item Name,Item Price,Item Fundraising Type,Quantity,Total Item Amount
1,Alice Smith,Alice,Smith,alice@example.com,2025-03-01,Bike,5,Raffle,3,15
2,Bob Jones,Bob,Jones,bob@example.com,2025-03-01,Bike,5,Raffle,1,5
3,Carol White,Carol,White,carol@example.com,2025-03-02,Hamper,5,Raffle,2,10
4,Alice Smith,Alice,Smith,alice@example.com,2025-03-02,Hamper,5,Raffle,1,5
";

/// Names to a set of strings, for order-free comparisons
pub fn name_set<'a>(names: impl IntoIterator<Item = &'a str>) -> std::collections::BTreeSet<String> {
    names.into_iter().map(str::to_string).collect()
}
