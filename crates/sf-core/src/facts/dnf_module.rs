//! `dnf module list` and `dnf module info` parsing.

use regex::Regex;
use serde::{Deserialize, Serialize};
use sf_common::{Error, FactKind, Result};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// One stream of a module, with its status flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStream {
    pub stream: String,
    /// Profile names with `[d]`/`[i]` markers stripped.
    pub profiles: Vec<String>,
    pub summary: String,
    pub default: bool,
    pub enabled: bool,
    pub disabled: bool,
    pub active: bool,
}

/// A module and the streams listed for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnfModule {
    pub name: String,
    pub streams: Vec<ModuleStream>,
}

impl DnfModule {
    /// Streams that would be installed by `dnf module install <name>`.
    pub fn active_streams(&self) -> impl Iterator<Item = &ModuleStream> {
        self.streams.iter().filter(|s| s.active)
    }
}

/// Parsed `dnf module list` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnfModuleList {
    pub modules: BTreeMap<String, DnfModule>,
}

impl DnfModuleList {
    pub fn get(&self, name: &str) -> Option<&DnfModule> {
        self.modules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Split `"2.4 [d][e]"` into the bare value and its single-letter flags.
fn split_flags(text: &str) -> (String, Vec<char>) {
    let mut flags = Vec::new();
    let mut rest = text.trim();
    while let Some(open) = rest.rfind('[') {
        let tail = &rest[open..];
        let mut chars = tail.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some('['), Some(flag), Some(']'), None) => {
                flags.push(flag);
                rest = rest[..open].trim_end();
            }
            _ => break,
        }
    }
    (rest.to_string(), flags)
}

fn split_profiles(text: &str) -> Vec<String> {
    text.split(',')
        .map(|p| split_flags(p).0)
        .filter(|p| !p.is_empty())
        .collect()
}

fn stream_from(stream_col: &str, profiles: Vec<String>, summary: String) -> ModuleStream {
    let (stream, flags) = split_flags(stream_col);
    ModuleStream {
        stream,
        profiles,
        summary,
        default: flags.contains(&'d'),
        enabled: flags.contains(&'e'),
        disabled: flags.contains(&'x'),
        active: flags.contains(&'a'),
    }
}

/// Column start offsets (in chars) taken from the table header.
struct Columns {
    stream: usize,
    profiles: usize,
    summary: usize,
}

impl Columns {
    fn from_header(line: &str) -> Option<Columns> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields != ["Name", "Stream", "Profiles", "Summary"] {
            return None;
        }
        let offset = |label: &str| line.find(label).map(|b| line[..b].chars().count());
        Some(Columns {
            stream: offset("Stream")?,
            profiles: offset("Profiles")?,
            summary: offset("Summary")?,
        })
    }

    fn cut(chars: &[char], start: usize, end: usize) -> String {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        chars[start..end].iter().collect::<String>().trim().to_string()
    }

    fn split(&self, line: &str) -> (String, String, String, String) {
        let chars: Vec<char> = line.chars().collect();
        (
            Self::cut(&chars, 0, self.stream),
            Self::cut(&chars, self.stream, self.profiles),
            Self::cut(&chars, self.profiles, self.summary),
            Self::cut(&chars, self.summary, chars.len()),
        )
    }
}

/// Parse `dnf module list` output.
///
/// Several repository sections may repeat the same module; streams are
/// merged per module and de-duplicated by stream name.
pub fn parse_dnf_module_list(content: &str) -> Result<DnfModuleList> {
    let mut list = DnfModuleList::default();
    let mut columns: Option<Columns> = None;
    let mut saw_header = false;

    for line in content.lines() {
        if let Some(cols) = Columns::from_header(line) {
            columns = Some(cols);
            saw_header = true;
            continue;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("Hint:") {
            columns = None;
            continue;
        }
        let Some(cols) = columns.as_ref() else {
            continue;
        };
        if trimmed.starts_with("Error:") {
            continue;
        }

        let (name, stream_col, profiles_col, summary) = cols.split(line);
        if name.is_empty() || stream_col.is_empty() {
            continue;
        }
        let stream = stream_from(&stream_col, split_profiles(&profiles_col), summary);

        let module = list
            .modules
            .entry(name.clone())
            .or_insert_with(|| DnfModule {
                name,
                streams: Vec::new(),
            });
        if !module.streams.iter().any(|s| s.stream == stream.stream) {
            module.streams.push(stream);
        }
    }

    if !saw_header {
        return Err(Error::parse(
            FactKind::DnfModules,
            "no module table header found",
        ));
    }
    if list.is_empty() {
        return Err(Error::skip(FactKind::DnfModules, "no modules listed"));
    }

    for module in list.modules.values_mut() {
        let any_enabled = module.streams.iter().any(|s| s.enabled);
        for stream in &mut module.streams {
            stream.active = stream.enabled || (!any_enabled && stream.default && !stream.disabled);
        }
    }

    Ok(list)
}

/// One block of `dnf module info` output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnfModuleInfoEntry {
    pub name: String,
    pub streams: Vec<ModuleStream>,
    pub version: String,
    pub context: String,
    pub default_profiles: String,
    pub repo: String,
    pub description: String,
    pub artifacts: Vec<String>,
}

/// Parsed `dnf module info` output, grouped by module name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnfModuleInfo {
    pub entries: BTreeMap<String, Vec<DnfModuleInfoEntry>>,
}

impl DnfModuleInfo {
    /// Module names, sorted.
    pub fn modules(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> &[DnfModuleInfoEntry] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct modules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn info_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z ]*?)\s+:\s?(.*)$").expect("static regex"))
}

fn continuation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s+:\s?(.*)$").expect("static regex"))
}

fn entry_from_block(block: &BTreeMap<String, Vec<String>>) -> Option<DnfModuleInfoEntry> {
    let first = |key: &str| {
        block
            .get(key)
            .and_then(|v| v.first())
            .cloned()
            .unwrap_or_default()
    };
    let name = first("Name");
    if name.is_empty() {
        return None;
    }
    let stream = stream_from(
        &first("Stream"),
        split_profiles(&first("Profiles")),
        first("Summary"),
    );
    Some(DnfModuleInfoEntry {
        name,
        streams: vec![stream],
        version: first("Version"),
        context: first("Context"),
        default_profiles: first("Default profiles"),
        repo: first("Repo"),
        description: first("Description"),
        artifacts: block.get("Artifacts").cloned().unwrap_or_default(),
    })
}

fn flush_block(block: &mut BTreeMap<String, Vec<String>>, info: &mut DnfModuleInfo) {
    if let Some(entry) = entry_from_block(block) {
        info.entries.entry(entry.name.clone()).or_default().push(entry);
    }
    block.clear();
}

/// Parse `dnf module info` output: blank-line separated `Key : value`
/// blocks, with ` : value` continuation lines.
pub fn parse_dnf_module_info(content: &str) -> Result<DnfModuleInfo> {
    let mut info = DnfModuleInfo::default();
    let mut block: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut last_key: Option<String> = None;

    for line in content.lines() {
        if line.trim().is_empty() {
            flush_block(&mut block, &mut info);
            last_key = None;
            continue;
        }
        if let Some(caps) = continuation_re().captures(line) {
            if let Some(key) = &last_key {
                block
                    .entry(key.clone())
                    .or_default()
                    .push(caps[1].trim().to_string());
            }
            continue;
        }
        if let Some(caps) = info_line_re().captures(line) {
            let key = caps[1].trim().to_string();
            block
                .entry(key.clone())
                .or_default()
                .push(caps[2].trim().to_string());
            last_key = Some(key);
        }
    }
    flush_block(&mut block, &mut info);

    if info.is_empty() {
        return Err(Error::skip(FactKind::DnfModules, "no module info blocks found"));
    }
    Ok(info)
}
