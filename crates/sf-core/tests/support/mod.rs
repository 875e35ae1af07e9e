#![allow(dead_code)]

pub mod dnf_fixtures;
