//! Small city files for tests.

use std::fs;
use std::path::{Path, PathBuf};

pub const CHICAGO_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St & Adams St,Clinton St & Madison St,Subscriber,Male,1989
2017-01-02 09:10:00,2017-01-02 09:15:00,300,Canal St & Adams St,Clinton St & Madison St,Subscriber,Female,1990
2017-03-06 17:00:00,2017-03-06 17:20:00,1200,Canal St & Adams St,Streeter Dr & Grand Ave,Customer,,
2017-03-06 09:30:00,2017-03-06 09:31:00,60,Clinton St & Madison St,Streeter Dr & Grand Ave,Subscriber,Male,1990
2017-06-05 08:15:00,2017-06-05 09:21:40,4000,Streeter Dr & Grand Ave,Canal St & Adams St,,Male,1975
2017-03-11 12:00:00,2017-03-11 12:08:20,500,Canal St & Adams St,Clinton St & Madison St,Customer,Female,1990
";

/// Washington-shaped data: no gender or birth year columns.
pub const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Subscriber
2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber
2017-03-11 10:05:00,2017-03-11 10:20:00,900.0,14th & Belmont St NW,15th & K St NW,Customer
";

pub fn write_chicago(dir: &Path) -> PathBuf {
    write(dir, "chicago.csv", CHICAGO_CSV)
}

pub fn write_washington(dir: &Path) -> PathBuf {
    write(dir, "washington.csv", WASHINGTON_CSV)
}

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
