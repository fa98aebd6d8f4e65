//! Terminal rendering for turns, notices, and settings.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use parley_ai::{Role, Session, UsageTracker};
use parley_config::ParleyConfig;

use super::settings::Sidebar;

pub(crate) fn print_banner(sidebar: &Sidebar) {
    println!();
    println!("  {}", style("Parley").cyan().bold());
    println!(
        "  {}",
        style("Persona chat with transcript export and optional voice.").dim()
    );
    println!(
        "  {} {} · {} {} · {} {}",
        style("persona").dim(),
        sidebar.persona.name,
        style("model").dim(),
        sidebar.model,
        style("temperature").dim(),
        sidebar.temperature
    );
    println!("  {}", style("Type /help for commands.").dim());
    println!();
}

pub(crate) fn print_turn(role: Role, content: &str) {
    let label = match role {
        Role::User => style(role.label()).green().bold(),
        Role::Assistant => style(role.label()).cyan().bold(),
        Role::System => style(role.label()).dim(),
    };
    println!("  {label} {}", content.trim());
    println!();
}

pub(crate) fn print_history(session: &Session) {
    println!();
    let mut pairs = session.render_pairs().peekable();
    if pairs.peek().is_none() {
        println!("  {}", style("No messages yet.").dim());
        println!();
        return;
    }
    for (role, content) in pairs {
        print_turn(role, content);
    }
}

pub(crate) fn success(message: &str) {
    println!("  {} {message}", style("✓").green().bold());
}

pub(crate) fn info(message: &str) {
    println!("  {} {message}", style("i").cyan().bold());
}

pub(crate) fn warning(message: &str) {
    println!("  {} {message}", style("!").yellow().bold());
}

pub(crate) fn error(message: &str) {
    eprintln!("  {} {message}", style("x").red().bold());
}

pub(crate) fn print_settings(sidebar: &Sidebar, session: &Session, output_dir: &std::path::Path) {
    println!();
    println!("  {}", style("Settings").bold());
    println!("  {:<12} {}", style("persona").dim(), sidebar.persona.name);
    println!("  {:<12} {}", style("model").dim(), sidebar.model);
    println!("  {:<12} {}", style("temperature").dim(), sidebar.temperature);
    println!(
        "  {:<12} {}",
        style("speech").dim(),
        if sidebar.tts { "on" } else { "off" }
    );
    println!("  {:<12} {}", style("output").dim(), output_dir.display());
    println!("  {:<12} {}", style("turns").dim(), session.turns().len());
    println!();
}

pub(crate) fn print_choices<'a>(title: &str, current: &str, choices: impl Iterator<Item = &'a str>) {
    println!();
    println!("  {}", style(title).bold());
    for choice in choices {
        if choice == current {
            println!("  {} {}", style("●").cyan(), style(choice).bold());
        } else {
            println!("  {} {choice}", style("○").dim());
        }
    }
    println!();
}

pub(crate) fn print_personas(config: &ParleyConfig, sidebar: &Sidebar) {
    print_choices(
        "Personas",
        &sidebar.persona.name,
        config.personas.iter().map(|p| p.name.as_str()),
    );
}

pub(crate) fn print_models(config: &ParleyConfig, sidebar: &Sidebar) {
    print_choices(
        "Models",
        &sidebar.model,
        config.chat.models.iter().map(String::as_str),
    );
}

pub(crate) fn print_usage(usage: &UsageTracker) {
    println!();
    println!("  {}", style("Token usage").bold());
    if usage.call_count() == 0 {
        println!("  {}", style("No replies yet.").dim());
        println!();
        return;
    }
    for (model, u) in usage.models() {
        println!(
            "  {:<16} {} prompt + {} completion",
            model, u.prompt_tokens, u.completion_tokens
        );
    }
    println!(
        "  {:<16} {} tokens over {} replies",
        style("total").dim(),
        usage.total().total_tokens(),
        usage.call_count()
    );
    println!();
}

/// Spinner shown while a remote call is in flight.
pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
