//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::{style, StyledObject};

use crate::vault::{CredentialRecord, SecurityInsights, Strength};

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Strength label colored red / yellow / green.
pub fn strength_label(strength: Strength) -> StyledObject<&'static str> {
    let label = style(strength.as_str());
    match strength {
        Strength::Weak => label.red(),
        Strength::Medium => label.yellow(),
        Strength::Strong => label.green(),
    }
}

/// Print a table of credentials (Id, Title, Username, URL, Strength, Updated).
pub fn print_records_table(records: &[CredentialRecord], reveal: bool) {
    if records.is_empty() {
        info("No credentials in this vault yet.");
        tip("Run `passvault add <TITLE> <USERNAME>` to add your first credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Id", "Title", "Username", "URL", "Strength", "Updated"];
    if reveal {
        header.insert(3, "Password");
    }
    table.set_header(header);

    for r in records {
        let mut row = vec![
            r.id.clone(),
            r.title.clone(),
            r.username.clone(),
            r.url.clone(),
            strength_label(r.strength).to_string(),
            r.last_updated.format("%Y-%m-%d").to_string(),
        ];
        if reveal {
            row.insert(3, r.password.clone());
        }
        table.add_row(row);
    }

    println!("{table}");
}

/// Print every field of one credential.
pub fn print_record(record: &CredentialRecord) {
    println!("{:>10}  {}", style("Id").dim(), record.id);
    println!("{:>10}  {}", style("Title").dim(), style(&record.title).bold());
    println!("{:>10}  {}", style("Username").dim(), record.username);
    println!("{:>10}  {}", style("Password").dim(), record.password);
    println!("{:>10}  {}", style("URL").dim(), record.url);
    println!("{:>10}  {}", style("Strength").dim(), strength_label(record.strength));
    println!(
        "{:>10}  {}",
        style("Updated").dim(),
        record.last_updated.format("%Y-%m-%d")
    );
}

/// Print the security overview.
pub fn print_insights(insights: &SecurityInsights) {
    let score = style(insights.security_score);
    let score = match insights.security_score {
        80..=100 => score.green(),
        50..=79 => score.yellow(),
        _ => score.red(),
    };
    println!("Security score: {}/100", score.bold());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Count"]);
    table.add_row(vec!["Total passwords".to_string(), insights.total_passwords.to_string()]);
    table.add_row(vec!["Weak passwords".to_string(), insights.weak_passwords.to_string()]);
    table.add_row(vec!["Reused passwords".to_string(), insights.reused_passwords.to_string()]);
    table.add_row(vec!["Old passwords".to_string(), insights.old_passwords.to_string()]);
    println!("{table}");

    if insights.weak_passwords > 0 {
        tip("Replace weak passwords: `passvault edit <ID> --generate`");
    }
    if insights.reused_passwords > 0 {
        tip("Give every site its own password.");
    }
}
