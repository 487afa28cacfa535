use clap::Parser;
use log::info;
use tokio::sync::oneshot;
use tokio::time::Duration;

use ignis_core::{sync_callback, ComponentSpec, Initializer, Startup};

/// Ignis: prioritized component lifecycle initializer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Startup delay of the deferred demo component, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    println!("Ignis: component lifecycle initializer");

    let args = CliArgs::parse();

    if let Err(err) = run(args).await {
        log::error!("initialization failed [{}]: {}", err.code(), err);
        std::process::exit(1);
    }
}

/// Drive the demo boot: two synchronous components around one deferred,
/// timer-backed component, registered out of priority order on purpose.
async fn run(args: CliArgs) -> ignis_core::Result<()> {
    let initializer = Initializer::new();

    let foo = ComponentSpec::new("foo").priority(1).factory(|| {
        println!("foo component is resolved");
        Ok(Startup::Ready)
    });

    let delay = Duration::from_millis(args.delay_ms);
    let timer = ComponentSpec::new("timer").priority(2).factory(move || {
        println!("timer component is instantiated");
        Ok(Startup::pending(async move {
            tokio::time::sleep(delay).await;
            println!("timer component is resolved");
            Ok(())
        }))
    });

    let bar = ComponentSpec::new("bar").priority(3).factory(|| {
        println!("bar component is resolved");
        Ok(Startup::Ready)
    });

    let (done_tx, done_rx) = oneshot::channel();
    initializer
        .set_callback(sync_callback(move || {
            println!("all components are resolved");
            done_tx.send(()).ok();
        }))
        .await?;

    // The initializer sorts by priority, registration order does not matter
    initializer.register_component(timer).await?;
    initializer.register_component(foo).await?;
    initializer.register_component(bar).await?;

    initializer.instantiate_components().await?;

    done_rx.await.ok();
    info!("initialization complete");
    Ok(())
}
