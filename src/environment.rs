use std::{
    ffi::OsString,
    fmt::{Display, Formatter},
    io::Write,
};

use log::debug;

use crate::error::Error;

/// One printed line of the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Arg(String),
    Env { key: String, value: String },
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Entry::Arg(arg) => write!(f, "Arg: {}", arg),
            Entry::Env { key, value } => write!(f, "Env: {} = {}", key, value),
        }
    }
}

/// Arguments followed by environment entries, in the order they get printed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    pub fn new<A, E, K, V>(args: A, env: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = args
            .into_iter()
            .map(|arg| Entry::Arg(arg.into()))
            .chain(env.into_iter().map(|(key, value)| Entry::Env {
                key: key.into(),
                value: value.into(),
            }))
            .collect();
        Self { entries }
    }

    /// Arguments of this process without the program name, and its environment.
    ///
    /// Values that are not valid Unicode are converted lossily.
    pub fn capture() -> Self {
        Self::new(
            std::env::args_os().skip(1).map(lossy),
            std::env::vars_os().map(|(k, v)| (lossy(k), lossy(v))),
        )
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Key/value pairs of the environment entries, in printing order.
    pub fn env_vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| match entry {
            Entry::Env { key, value } => Some((key.as_str(), value.as_str())),
            Entry::Arg(_) => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry followed by the count line and returns the count.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<usize, Error> {
        let mut num_entries = 0;
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
            num_entries += 1;
        }
        writeln!(out, "Number of entries: {}", num_entries)?;
        out.flush()?;
        debug!("printed {} entries", num_entries);
        Ok(num_entries)
    }
}

fn lossy(s: OsString) -> String {
    s.into_string()
        .unwrap_or_else(|s| s.to_string_lossy().into_owned())
}
