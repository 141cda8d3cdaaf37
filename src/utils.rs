use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Global counter for sequential file naming
static GLOBAL_COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Agents that get a message archive directory
const AGENT_DIRS: &[&str] = &["coordinator", "search_agent", "financial_agent"];

/// Clear the message archive at the start of a new query
pub fn clear_message_archive() -> Result<()> {
    let bin_path = Path::new("bin");

    if bin_path.exists() {
        fs::remove_dir_all(bin_path)?;
        log::info!("Cleared message archive for new query");
    }

    for agent in AGENT_DIRS {
        fs::create_dir_all(format!("bin/messages/{}", agent))?;
    }

    // Reset counter
    GLOBAL_COUNTER.store(1, Ordering::SeqCst);

    log::info!("Message archive recreated");
    Ok(())
}

/// Get the next global sequence number
pub fn get_next_global_sequence_number() -> usize {
    GLOBAL_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Generate a sequential filename for messages
pub fn generate_message_filename(agent_type: &str, sequence_number: usize) -> String {
    format!("{:03}_{}_message.json", sequence_number, agent_type)
}

/// Store Claude message in message history - shared across all agents
pub fn store_claude_message(agent_type: &str, message: &Value) -> Result<()> {
    let sequence_number = get_next_global_sequence_number();
    let filename = generate_message_filename(agent_type, sequence_number);
    let dir_path_str = format!("bin/messages/{}", agent_type);
    let dir_path = Path::new(&dir_path_str);
    fs::create_dir_all(dir_path)?;

    let file_path = dir_path.join(&filename);
    fs::write(file_path, serde_json::to_string_pretty(message)?)?;
    log::debug!("Stored {} Claude message: {}", agent_type, filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_filenames_are_zero_padded() {
        assert_eq!(
            generate_message_filename("coordinator", 7),
            "007_coordinator_message.json"
        );
        assert_eq!(
            generate_message_filename("search_agent", 123),
            "123_search_agent_message.json"
        );
    }

    #[test]
    fn sequence_numbers_increase() {
        let first = get_next_global_sequence_number();
        let second = get_next_global_sequence_number();
        assert!(second > first);
    }
}
