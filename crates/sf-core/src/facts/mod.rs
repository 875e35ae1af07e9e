//! Evidence parsers.
//!
//! Each parser turns the raw text of one snapshot artifact into a small
//! typed fact. When the text matches none of the recognised grammars the
//! parser returns [`Error::Skip`](sf_common::Error::Skip), and callers
//! treat that source as absent.

pub mod boot_log;
pub mod dnf_module;
pub mod kernel;
pub mod packages;
pub mod release;
pub mod version;

pub use boot_log::{parse_dmesg, BootLogFact};
pub use dnf_module::{
    parse_dnf_module_info, parse_dnf_module_list, DnfModule, DnfModuleInfo, DnfModuleInfoEntry,
    DnfModuleList, ModuleStream,
};
pub use kernel::{parse_uname, KernelFact};
pub use packages::{parse_installed_rpms, PackageInventory, PackageRecord};
pub use release::{parse_os_release, parse_redhat_release, OsReleaseFact, RedhatReleaseFact};
pub use version::{compare_evr, rpmvercmp};
