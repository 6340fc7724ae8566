//! A terminal chat client for the clinic assistant.

#[macro_use]
extern crate tracing;

use std::io::Write as _;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tokio::io::{self, AsyncBufReadExt};
use tokio::time::sleep;
use vetbot::{
    ChatSession, DestinationKind, ReplyOption, Turn, settings_from_env,
};

const BAR_CHAR: &str = "▎";

/// Pause before each reply so the exchange reads like typing. Purely
/// presentational; the responder answers instantly.
const TYPING_DELAY: Duration = Duration::from_millis(600);

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = settings_from_env();
    let mut session = ChatSession::new(&settings);

    println!(
        "{}",
        "Pati Veteriner Kliniği — sohbet asistanı (/reset ile baştan başlayın)"
            .dimmed()
    );
    let mut last_options = print_turn(&session.turns()[0]);

    loop {
        print!("> ");
        std::io::stdout().flush().unwrap();

        let Some(line) = read_line().await else {
            break;
        };
        let input = line.trim().to_owned();

        if input == "/reset" {
            session.reset();
            last_options = print_turn(&session.turns()[0]);
            continue;
        }

        // A bare number picks one of the last reply's options.
        let picked = input
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=last_options.len()).contains(n))
            .map(|n| last_options[n - 1].clone());
        if let Some(option) = picked {
            match option {
                ReplyOption::Navigate { label, destination } => {
                    print_navigation(&label, &destination);
                }
                ReplyOption::Invoke { label, intent } => {
                    typing_pause().await;
                    let turn =
                        session.select_intent(&label, &intent).clone();
                    last_options = print_turn(&turn);
                }
            }
            continue;
        }

        typing_pause().await;
        let turn = session.submit_text(&input).clone();
        last_options = print_turn(&turn);
    }

    println!("{}", "Görüşmek üzere! 🐾".dimmed());
}

/// Renders one assistant turn and returns its options for dispatching.
fn print_turn(turn: &Turn) -> Vec<ReplyOption> {
    let bar = if turn.urgent {
        BAR_CHAR.bright_red().to_string()
    } else {
        BAR_CHAR.bright_cyan().to_string()
    };

    if turn.urgent {
        println!("{bar}🚨 {}", turn.text.bright_red().bold());
    } else {
        println!("{bar}🐾 {}", turn.text.bright_white());
    }
    if let Some(detail) = &turn.detail {
        println!("{bar}   {detail}");
    }
    for (idx, option) in turn.options.iter().enumerate() {
        println!(
            "{bar}   {}. {}",
            (idx + 1).bright_yellow(),
            option.label()
        );
    }
    if !turn.options.is_empty() {
        println!(
            "{bar}   {}",
            "(bir seçenek için numarasını yazın)".dimmed()
        );
    }

    turn.options.clone()
}

/// A terminal cannot navigate, so describe where the option would go.
fn print_navigation(label: &str, destination: &str) {
    let hint = match DestinationKind::of(destination) {
        DestinationKind::Phone => "aramak için",
        DestinationKind::WhatsApp => "WhatsApp'ta açmak için",
        DestinationKind::Email => "e-posta göndermek için",
        DestinationKind::External => "tarayıcıda açmak için",
        DestinationKind::Internal => "sitede açmak için",
    };
    println!(
        "{}↗ {label} — {hint}: {}",
        BAR_CHAR.bright_green(),
        destination.bright_white().bold()
    );
}

async fn typing_pause() {
    let progress_style = ProgressStyle::with_template("{spinner} {wide_msg}")
        .unwrap()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏");
    let progress_bar = ProgressBar::new_spinner();
    progress_bar.set_style(progress_style);
    progress_bar.set_message("yazıyor...");
    progress_bar.enable_steady_tick(Duration::from_millis(80));

    sleep(TYPING_DELAY).await;
    progress_bar.finish_and_clear();
}

async fn read_line() -> Option<String> {
    let mut stdin = io::BufReader::new(io::stdin());
    let mut line = String::new();

    match stdin.read_line(&mut line).await {
        Ok(count) => {
            if count == 0 {
                return None;
            }
            Some(line)
        }
        Err(err) => {
            error!("error reading input: {}", err);
            None
        }
    }
}
