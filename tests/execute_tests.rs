//! Integration tests for scanning and executing commands

use anyhow::{Result, bail};
use optbind::{Command, CommandSpec, OptionSpec, OptsError, Value, build_registry, execute};
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct Recorder {
    log: Vec<String>,
    ran: bool,
}

impl Command for Recorder {
    fn declare() -> CommandSpec<Self> {
        CommandSpec::new("recorder")
            .option(
                OptionSpec::new()
                    .short('q')
                    .long("quit")
                    .description("stop with code 1")
                    .exit()
                    .action(|recorder: &mut Self| {
                        recorder.log.push("quit".to_owned());
                        Ok(1)
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('f')
                    .long("flag")
                    .description("a plain flag")
                    .action(|recorder: &mut Self| {
                        recorder.log.push("flag".to_owned());
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('x')
                    .long("text")
                    .description("some text")
                    .value_name("TEXT")
                    .action_with(|recorder: &mut Self, text: String| {
                        recorder.log.push(format!("text={text}"));
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .long("count")
                    .description("a 32-bit count")
                    .value_name("COUNT")
                    .action_with(|recorder: &mut Self, count: i32| {
                        recorder.log.push(format!("count={count}"));
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .long("big")
                    .description("a 64-bit number")
                    .value_name("N")
                    .action_with(|recorder: &mut Self, big: i64| {
                        recorder.log.push(format!("big={big}"));
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('e')
                    .long("enabled")
                    .description("a boolean")
                    .value_name("BOOL")
                    .action_with(|recorder: &mut Self, enabled: bool| {
                        recorder.log.push(format!("enabled={enabled}"));
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .short('v')
                    .description("more output")
                    .multiple()
                    .action(|recorder: &mut Self| {
                        recorder.log.push("v".to_owned());
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .long("done")
                    .description("stop with the handler's code")
                    .exit()
                    .action(|recorder: &mut Self| {
                        recorder.log.push("done".to_owned());
                        Ok(())
                    }),
            )
    }

    fn instantiate() -> Result<Self> {
        Ok(Self::default())
    }

    fn run(&mut self) -> Result<()> {
        self.ran = true;
        Ok(())
    }
}

#[test]
fn empty_arguments_run_the_command() {
    let (recorder, code) = execute::<Recorder, &str>(&[]).unwrap();
    assert_eq!(code, 0);
    assert!(recorder.ran);
    assert!(recorder.log.is_empty());
}

#[test]
fn flag_queues_one_invocation_without_argument() {
    let registry = build_registry::<Recorder>().unwrap();
    let queue = registry.scan(&["--flag"]).unwrap();

    let id = registry.find_long("flag").unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.calls(id), &[None::<Value>]);
}

#[test]
fn short_text_option_takes_next_token_verbatim() {
    let registry = build_registry::<Recorder>().unwrap();
    let queue = registry.scan(&["-x", "value"]).unwrap();

    let id = registry.find_short('x').unwrap();
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.calls(id), &[Some(Value::Text("value".to_owned()))]);
}

#[test]
fn value_may_look_like_an_option() {
    let (recorder, _) = execute::<Recorder, _>(&["--text", "--flag"]).unwrap();
    assert_eq!(recorder.log, vec!["text=--flag"]);
}

#[test]
fn integer_values_are_coerced() {
    let registry = build_registry::<Recorder>().unwrap();
    let queue = registry
        .scan(&["--count", "5", "--big", "-9000000000"])
        .unwrap();

    assert_eq!(
        queue.calls(registry.find_long("count").unwrap()),
        &[Some(Value::Int(5))]
    );
    assert_eq!(
        queue.calls(registry.find_long("big").unwrap()),
        &[Some(Value::Long(-9_000_000_000))]
    );
}

#[test]
fn non_numeric_integer_is_invalid() {
    let err = execute::<Recorder, _>(&["--count", "abc"]).unwrap_err();
    assert!(matches!(
        err,
        OptsError::InvalidValue { ref token, ref value, .. } if token == "--count" && value == "abc"
    ));
}

#[test]
fn bad_64_bit_values_are_invalid() {
    for literal in ["abc", "99999999999999999999"] {
        let err = execute::<Recorder, _>(&["--big", literal]).unwrap_err();
        assert!(
            matches!(err, OptsError::InvalidValue { ref token, ref value, .. } if token == "--big" && value == literal),
            "literal {literal:?}"
        );
    }
}

#[test]
fn out_of_range_integer_is_invalid() {
    let err = execute::<Recorder, _>(&["--count", "9000000000"]).unwrap_err();
    assert!(matches!(err, OptsError::InvalidValue { .. }));
}

#[test]
fn boolean_parsing_is_lenient() {
    let (recorder, _) = execute::<Recorder, _>(&["-e", "TRUE"]).unwrap();
    assert_eq!(recorder.log, vec!["enabled=true"]);

    for literal in ["false", "yes", "1", "", "truthy"] {
        let (recorder, _) = execute::<Recorder, _>(&["-e", literal]).unwrap();
        assert_eq!(recorder.log, vec!["enabled=false"], "literal {literal:?}");
    }
}

#[test]
fn exit_option_halts_with_its_code() {
    let (recorder, code) = execute::<Recorder, _>(&["--flag", "--quit", "-x", "later"]).unwrap();
    assert_eq!(code, 1);
    assert_eq!(recorder.log, vec!["quit"]);
    assert!(!recorder.ran);
}

#[test]
fn exit_option_without_code_yields_zero() {
    let (recorder, code) = execute::<Recorder, _>(&["--done", "-x", "a"]).unwrap();
    assert_eq!(code, 0);
    assert_eq!(recorder.log, vec!["text=a", "done"]);
    assert!(!recorder.ran);
}

#[test]
fn replay_follows_declaration_order() {
    let (recorder, code) =
        execute::<Recorder, _>(&["-v", "--count", "3", "-x", "a", "-v", "--flag"]).unwrap();
    assert_eq!(code, 0);
    assert_eq!(recorder.log, vec!["flag", "text=a", "count=3", "v", "v"]);
    assert!(recorder.ran);
}

#[test]
fn repeated_single_option_is_a_duplicate() {
    let err = execute::<Recorder, _>(&["-f", "--flag"]).unwrap_err();
    assert!(matches!(err, OptsError::DuplicateOption { ref token } if token == "--flag"));
}

#[test]
fn repeated_multiple_option_queues_each_occurrence() {
    let registry = build_registry::<Recorder>().unwrap();
    let queue = registry.scan(&["-v", "-v"]).unwrap();
    assert_eq!(queue.calls(registry.find_short('v').unwrap()), &[None::<Value>, None]);
}

#[test]
fn unknown_and_malformed_tokens() {
    let err = execute::<Recorder, _>(&["--bogus"]).unwrap_err();
    assert!(matches!(err, OptsError::UnknownOption { ref token } if token == "--bogus"));

    let err = execute::<Recorder, _>(&["-z"]).unwrap_err();
    assert!(matches!(err, OptsError::UnknownOption { ref token } if token == "-z"));

    let err = execute::<Recorder, _>(&["-"]).unwrap_err();
    assert!(matches!(err, OptsError::MalformedArgument { ref token } if token == "-"));

    let err = execute::<Recorder, _>(&["-fv"]).unwrap_err();
    assert!(matches!(err, OptsError::MalformedArgument { .. }));
}

#[test]
fn option_value_missing_at_end() {
    let err = execute::<Recorder, _>(&["--flag", "--text"]).unwrap_err();
    assert!(matches!(err, OptsError::MissingArgument { ref token } if token == "--text"));
}

static INSTANCES: AtomicUsize = AtomicUsize::new(0);

struct Counted;

impl Command for Counted {
    fn declare() -> CommandSpec<Self> {
        CommandSpec::new("counted").option(
            OptionSpec::new()
                .long("go")
                .description("go")
                .action(|_: &mut Self| Ok(())),
        )
    }

    fn instantiate() -> Result<Self> {
        INSTANCES.fetch_add(1, Ordering::SeqCst);
        Ok(Self)
    }
}

#[test]
fn scan_errors_happen_before_instantiation() {
    let before = INSTANCES.load(Ordering::SeqCst);
    assert!(execute::<Counted, _>(&["--go", "stray"]).is_err());
    assert_eq!(INSTANCES.load(Ordering::SeqCst), before);

    execute::<Counted, _>(&["--go"]).unwrap();
    assert_eq!(INSTANCES.load(Ordering::SeqCst), before + 1);
}

struct Unbuildable;

impl Command for Unbuildable {
    fn declare() -> CommandSpec<Self> {
        CommandSpec::new("unbuildable")
    }

    fn instantiate() -> Result<Self> {
        bail!("no resources")
    }
}

#[test]
fn instantiation_failure_is_reported() {
    let err = execute::<Unbuildable, &str>(&[]).err().unwrap();
    assert!(matches!(err, OptsError::Instantiation { ref command, .. } if command == "unbuildable"));
    assert_eq!(err.exit_code(), 3);
}

thread_local! {
    static EFFECTS: RefCell<Vec<&'static str>> = const { RefCell::new(Vec::new()) };
}

struct Fragile;

impl Command for Fragile {
    fn declare() -> CommandSpec<Self> {
        CommandSpec::new("fragile")
            .option(
                OptionSpec::new()
                    .long("first")
                    .description("records an effect")
                    .action(|_: &mut Self| {
                        EFFECTS.with(|effects| effects.borrow_mut().push("first"));
                        Ok(())
                    }),
            )
            .option(
                OptionSpec::new()
                    .long("boom")
                    .description("fails")
                    .action(|_: &mut Self| -> Result<()> { bail!("kaboom") }),
            )
            .option(
                OptionSpec::new()
                    .long("last")
                    .description("records an effect")
                    .action(|_: &mut Self| {
                        EFFECTS.with(|effects| effects.borrow_mut().push("last"));
                        Ok(())
                    }),
            )
    }

    fn instantiate() -> Result<Self> {
        Ok(Self)
    }

    fn run(&mut self) -> Result<()> {
        EFFECTS.with(|effects| effects.borrow_mut().push("run"));
        Ok(())
    }
}

#[test]
fn invocation_failure_keeps_earlier_effects() {
    EFFECTS.with(|effects| effects.borrow_mut().clear());

    let err = execute::<Fragile, _>(&["--last", "--boom", "--first"])
        .err()
        .unwrap();

    assert!(matches!(err, OptsError::Invocation { ref target, .. } if target == "--boom"));
    assert_eq!(format!("{:#}", anyhow::Error::from(err)), "Invocation of --boom failed: kaboom");
    EFFECTS.with(|effects| assert_eq!(*effects.borrow(), vec!["first"]));
}

struct Broken;

impl Command for Broken {
    fn declare() -> CommandSpec<Self> {
        CommandSpec::new("broken")
    }

    fn instantiate() -> Result<Self> {
        Ok(Self)
    }

    fn run(&mut self) -> Result<()> {
        bail!("nothing to do")
    }
}

#[test]
fn default_action_failure_is_an_invocation_error() {
    let err = execute::<Broken, &str>(&[]).err().unwrap();
    assert!(matches!(err, OptsError::Invocation { .. }));
    assert_eq!(err.exit_code(), 4);
}
