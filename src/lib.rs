/*!
A small sample application meant to be stepped through by a debugger.

The program prints its command line arguments and environment, prints how many
entries it saw and then pushes a value through a trait and a generic wrapper.
Control flow is short and predictable on purpose, so breakpoints and stepping
land in the same places on every run.

# Main concepts

* **[`Base`]** - A trait with one operation, `do_something`, and a default
                 implementation returning configurable text.
* **[`Bass`]** - Implements [`Base`] and either returns its own field or falls
                 back to the default, depending on an injected [`Decide`]
                 provider.
* **[`TestGeneric`]** - Generic wrapper owning any [`Base`] value.
* **[`Snapshot`]** - Arguments and environment entries, in printing order.

### Decision providers

The branch `Bass` takes is decided by a provider. [`Always`] forces one branch,
[`RandomModulo`] answers [`Decision::Own`] whenever the next random number is
divisible by three. [`Strategy`] is the serializable form that the binary reads
from the `TESTAPP_STRATEGY` variable. An unknown value is logged and the
default strategy is used, so configuration never keeps the report from being
printed.

# Example

```
use testapp::{Config, Snapshot};

let snapshot = Snapshot::new(["first"], [("KEY", "value")]);
let mut out = Vec::new();
let outcome = testapp::run(&snapshot, &Config::default(), &mut out).unwrap();

assert_eq!(outcome.entries, 2);
assert_eq!(
    String::from_utf8(out).unwrap(),
    "Arg: first\nEnv: KEY = value\nNumber of entries: 2\n"
);
```

# Logging

Diagnostics go through the [`log`] facade. The binary installs `env_logger`
with a `warn` default, so set `RUST_LOG=testapp=trace` to see every decision.
*/

mod base;
mod bass;
mod config;
mod decision;
mod environment;
mod error;
pub mod generic;

use std::io::Write;

use log::debug;

pub use base::{base_do_something, Base, Plain, DEFAULT_BASE_TEXT};
pub use bass::{Bass, DEFAULT_BASS};
pub use config::{Config, BASE_TEXT_VAR, BASS_VAR, STRATEGY_VAR};
pub use decision::{Always, Decide, Decision, RandomModulo, Strategy};
pub use environment::{Entry, Snapshot};
pub use error::Error;
pub use generic::{do_generic, TestGeneric};

/// What a single [`run`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Number of printed argument and environment entries.
    pub entries: usize,
    /// Result of the generic helper. Not printed.
    pub useful: String,
}

/// Prints `snapshot` to `out`, then runs the generic helper over a `Bass` built
/// from `config`.
pub fn run<W: Write>(
    snapshot: &Snapshot,
    config: &Config,
    out: &mut W,
) -> Result<Outcome, Error> {
    let entries = snapshot.write_to(out)?;

    debug!("using {} strategy", config.strategy());
    let useful = do_generic(config.build_bass());
    debug!("do_something_useful returned {:?}", useful);

    Ok(Outcome { entries, useful })
}
