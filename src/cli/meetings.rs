//! CLI handler for listing the meeting catalog.

use anyhow::Result;

use crate::catalog::{MeetingCatalog, StaticCatalog};

pub fn handle_meetings_command() -> Result<()> {
    let catalog = StaticCatalog::demo();
    let meetings = catalog.list_meetings();

    println!("Meetings available for review:\n");
    for meeting in &meetings {
        println!(
            "  [{}] {} - {} at {} ({} tasks)",
            meeting.id,
            meeting.title,
            meeting.date,
            meeting.time,
            meeting.tasks.len()
        );
    }
    println!("\nStart a review with: recap review <id>");

    Ok(())
}
