//! The `greet` command bundled with the binary

use crate::declaration::{Command, CommandSpec, OptionSpec};
use crate::operations::print_usage;
use crate::value::PathConverter;
use anyhow::{Context as _, Result, bail};
use std::path::PathBuf;
use tracing::info;

const SALUTATIONS: [&str; 4] = ["Hello", "Hi", "Greetings", "Howdy"];

/// Prints a configurable greeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greet {
    pub name: String,
    pub count: i32,
    pub seed: Option<i64>,
    pub upper: bool,
    pub extras: Vec<String>,
    pub output: Option<PathBuf>,
}

impl Default for Greet {
    fn default() -> Self {
        Self {
            name: "world".to_owned(),
            count: 1,
            seed: None,
            upper: false,
            extras: Vec::new(),
            output: None,
        }
    }
}

impl Greet {
    /// The greeting line, without repetition
    #[must_use]
    pub fn message(&self) -> String {
        let salutation = self.seed.map_or(SALUTATIONS[0], |seed| {
            let len = SALUTATIONS.len() as i64;
            SALUTATIONS[seed.rem_euclid(len) as usize]
        });

        let mut message = format!("{salutation}, {}!", self.name);
        for extra in &self.extras {
            message.push(' ');
            message.push_str(extra);
        }

        if self.upper {
            message = message.to_uppercase();
        }

        message
    }
}

impl Command for Greet {
    fn declare() -> CommandSpec<Self> {
        CommandSpec::new("greet")
            .converter(PathConverter::new())
            .option(
                OptionSpec::new()
                    .short('h')
                    .long("help")
                    .description("show this help and exit")
                    .exit()
                    .action(|_: &mut Self| {
                        print_usage::<Self>()?;
                        Ok(0)
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('V')
                    .long("version")
                    .description("print the version and exit")
                    .exit()
                    .action(|_: &mut Self| {
                        println!("greet {}", env!("CARGO_PKG_VERSION"));
                        Ok(0)
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('n')
                    .long("name")
                    .description("who to greet")
                    .value_name("NAME")
                    .action_with(|greet: &mut Self, name: String| {
                        greet.name = name;
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('c')
                    .long("count")
                    .description("how many times to greet")
                    .value_name("COUNT")
                    .action_with(|greet: &mut Self, count: i32| {
                        if count < 0 {
                            bail!("count must not be negative, got {count}");
                        }
                        greet.count = count;
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('s')
                    .long("seed")
                    .description("pick the salutation")
                    .value_name("SEED")
                    .action_with(|greet: &mut Self, seed: i64| {
                        greet.seed = Some(seed);
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('u')
                    .long("upper")
                    .description("shout the greeting")
                    .value_name("BOOL")
                    .action_with(|greet: &mut Self, upper: bool| {
                        greet.upper = upper;
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('x')
                    .long("extra")
                    .description("append a word")
                    .value_name("WORD")
                    .multiple()
                    .action_with(|greet: &mut Self, word: String| {
                        greet.extras.push(word);
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('o')
                    .long("output")
                    .description("write to a file instead")
                    .value_name("FILE")
                    .action_with(|greet: &mut Self, path: PathBuf| {
                        greet.output = Some(path);
                        Ok(())
                    }),
            )
    }

    fn instantiate() -> Result<Self> {
        Ok(Self::default())
    }

    fn run(&mut self) -> Result<()> {
        let message = self.message();
        let count = usize::try_from(self.count).unwrap_or_default();

        match self.output.as_ref() {
            Some(path) => {
                let mut contents = String::new();
                for _ in 0..count {
                    contents.push_str(&message);
                    contents.push('\n');
                }
                std::fs::write(path, contents)
                    .with_context(|| format!("Failed to write greeting to {}", path.display()))?;
                info!("Wrote {} greeting(s) to {}", count, path.display());
            }
            None => {
                for _ in 0..count {
                    println!("{message}");
                }
            }
        }

        Ok(())
    }
}
