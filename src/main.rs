use anyhow::Context;
use std::path::PathBuf;

use wizard_stepper::components::footer::{NEXT_LABEL, PREVIOUS_LABEL};
use wizard_stepper::error::AppResult;
use wizard_stepper::{
    Component, DefaultStep, Node, Progress, Scope, Step, Steps, Wizard, WizardConfig, WizardError,
};

const LOG_TARGET_STARTUP: &str = "wizard_stepper::startup";

/// Initialize console tracing
///
/// Level comes from `RUST_LOG`, defaulting to `info`.
fn initialize_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .init();
}

/// Config from the path given on the command line, or the platform default
fn load_config() -> AppResult<WizardConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            WizardConfig::load_from(&path)
                .with_context(|| format!("loading wizard config from {}", path.display()))
        }
        None => Ok(WizardConfig::load().unwrap_or_else(|e| {
            tracing::warn!(target: LOG_TARGET_STARTUP, "Using default config: {}", e);
            WizardConfig::default()
        })),
    }
}

fn page(counter: usize) -> Node {
    Node::el("h1").child(format!("Page {}", counter)).into()
}

/// Story body: four pages plus a progress line read from the same context
fn story_body(scope: &Scope<DefaultStep>) -> Result<Node, WizardError> {
    let steps: Steps<DefaultStep> = (1..=4)
        .map(|i| Step::titled(i.to_string(), format!("Step {}", i), page(i)))
        .collect();

    let active = steps.render(scope)?;
    let progress = Progress.render(scope)?;
    Ok(Node::el("section").child(active).child(progress).into())
}

fn print_frame(wizard: &mut Wizard<DefaultStep>, caption: &str) -> AppResult<()> {
    let tree = wizard.render()?;
    println!("-- {}\n{}\n", caption, tree);
    Ok(())
}

fn main() -> AppResult<()> {
    initialize_tracing();
    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting wizard demo v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = load_config()?;
    let mut wizard = Wizard::with_config(config, story_body);
    let (events, _id) = wizard.provider().subscribe();

    print_frame(&mut wizard, "initial")?;

    for _ in 0..4 {
        let outcome = wizard.click(NEXT_LABEL);
        tracing::info!(?outcome, "Clicked {}", NEXT_LABEL);
        print_frame(&mut wizard, NEXT_LABEL)?;
    }

    wizard.click(PREVIOUS_LABEL);
    print_frame(&mut wizard, PREVIOUS_LABEL)?;

    // Effectful advance: the save runs to completion before the step moves.
    let ctx = wizard.context();
    let outcome = futures::executor::block_on(ctx.advance_after(async {
        tracing::info!("Saving step {} before advancing", ctx.active_step_index() + 1);
    }));
    tracing::info!(?outcome, "Advanced after save");
    print_frame(&mut wizard, "after save")?;

    ctx.go_to(0);
    print_frame(&mut wizard, "goto first")?;

    for event in events.try_iter() {
        tracing::debug!(?event, "Wizard event");
    }

    Ok(())
}
