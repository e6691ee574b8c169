use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{error, info, warn};

use score_core::{TickOutcome, TimerEngine};
use score_persistence::ScoreRepository;
use score_tracker::{
    commands::{dispatch, Command, Flow},
    config::Config,
    controller::{AppController, Confirmation, CLEAR_ALL_PROMPT},
    events::TracingEventHandler,
    open_store, render,
};

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so they never interleave with the scoreboard
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(config.log_level)
        .init();

    info!("Starting Score Tracker...");

    let store = match open_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    let (timer, mut ticks) = TimerEngine::with_ticker(config.timer_tick_period());
    let mut controller = AppController::load(ScoreRepository::new(store), timer).await;
    controller.add_event_handler(Box::new(TracingEventHandler));

    println!("{}", render::screen(&controller));
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => break,
                    Err(e) => {
                        error!("Failed to read input: {}", e);
                        break;
                    }
                };

                let command = match Command::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                let redraw = command.redraws();

                match dispatch(&mut controller, command).await {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Confirm) => {
                        println!("{} [y/N]", CLEAR_ALL_PROMPT);
                        let answer = lines.next_line().await.ok().flatten();
                        let confirmation = Confirmation::from_answer(answer.as_deref());
                        match controller.clear_all_data(confirmation).await {
                            Ok(true) => println!("{}", render::screen(&controller)),
                            Ok(false) => println!("Nothing was cleared."),
                            Err(e) => error!("{}", e),
                        }
                    }
                    Err(e) => {
                        warn!("{}", e);
                        println!("{}", e);
                    }
                }

                if redraw {
                    println!("{}", render::screen(&controller));
                }
            }
            Some(tick) = ticks.recv() => {
                match controller.on_timer_tick(tick) {
                    TickOutcome::Finished => println!("Time's up!"),
                    TickOutcome::Counted { remaining_seconds }
                        if remaining_seconds % 60 == 0 || remaining_seconds <= 10 =>
                    {
                        print!("{}", render::timer_line(&controller));
                    }
                    _ => {}
                }
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                break;
            }
        }
    }

    controller.reset_timer();
    info!("Score Tracker stopped.");
}
