use console::style;
use wabulk_contacts::ContactStore;
use wabulk_core::config::Config;

use crate::ContactsAction;

/// Load the configured contact list, or start empty if the file is missing.
fn load_or_empty(path: &str) -> anyhow::Result<ContactStore> {
    if std::path::Path::new(path).exists() {
        Ok(ContactStore::load_csv(path)?.0)
    } else {
        Ok(ContactStore::new())
    }
}

pub fn run(cfg: &Config, action: ContactsAction) -> anyhow::Result<()> {
    let path = super::contacts_path(cfg, None);
    if let Some(parent) = std::path::Path::new(&path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    match action {
        ContactsAction::Add { number, name } => {
            let mut store = load_or_empty(&path)?;
            store.add(name, &number)?;
            store.save_csv(&path)?;
            println!("{} added {number} ({} total)", style("✓").green(), store.len());
        }
        ContactsAction::List => {
            let store = load_or_empty(&path)?;
            if store.is_empty() {
                println!("No contacts in {path}");
                return Ok(());
            }
            println!("{:>4}  {:<20} {:<18} {}", "#", "Name", "Number", "Status");
            for (i, contact) in store.contacts().iter().enumerate() {
                println!(
                    "{i:>4}  {:<20} {:<18} {}",
                    contact.name.as_deref().unwrap_or("-"),
                    contact.number,
                    contact.status.display_name()
                );
            }
        }
        ContactsAction::Remove { index } => {
            let mut store = load_or_empty(&path)?;
            let removed = store.remove(index)?;
            store.save_csv(&path)?;
            println!("{} removed {}", style("✓").green(), removed.number);
        }
        ContactsAction::Clear => {
            let mut store = load_or_empty(&path)?;
            store.clear();
            store.save_csv(&path)?;
            println!("{} contact list cleared", style("✓").green());
        }
        ContactsAction::Import { path: source } => {
            // Import replaces the configured list, like the original tool.
            let (store, summary) = ContactStore::load_csv(&source)?;
            store.save_csv(&path)?;
            println!(
                "{} imported {} contact(s), skipped {} row(s) without a number",
                style("✓").green(),
                summary.imported,
                summary.skipped
            );
        }
        ContactsAction::Export { path: dest } => {
            let store = load_or_empty(&path)?;
            store.save_csv(&dest)?;
            println!(
                "{} exported {} contact(s) to {dest}",
                style("✓").green(),
                store.len()
            );
        }
    }
    Ok(())
}
