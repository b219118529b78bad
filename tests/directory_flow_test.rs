//! End-to-end command flow tests
//! Run with: cargo test --test directory_flow_test

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use async_trait::async_trait;
use directory_bot::application::errors::ResolverError;
use directory_bot::application::messaging::{CommandDispatcher, MessageParser};
use directory_bot::application::services::DirectoryService;
use directory_bot::domain::entities::{DirectoryCommand, PresenceStatus};
use directory_bot::domain::traits::{PresenceResolver, ProfileResolver};
use directory_bot::infrastructure::storage::MemoryStore;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

struct StubRoblox {
    names: HashMap<String, String>,
    online: Vec<String>,
    presence_calls: AtomicUsize,
}

impl StubRoblox {
    fn new() -> Self {
        let names = [("123", "Alice"), ("456", "Bob")]
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        Self {
            names,
            online: vec!["456".to_string()],
            presence_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProfileResolver for StubRoblox {
    async fn fetch_username(&self, user_id: &str) -> Result<String, ResolverError> {
        self.names.get(user_id).cloned().ok_or(ResolverError::MissingField("name"))
    }
}

#[async_trait]
impl PresenceResolver for StubRoblox {
    async fn fetch_presence(&self, user_id: &str) -> Result<PresenceStatus, ResolverError> {
        self.presence_calls.fetch_add(1, Ordering::SeqCst);
        if self.online.iter().any(|id| id == user_id) {
            Ok(PresenceStatus::Online)
        } else {
            Ok(PresenceStatus::Offline)
        }
    }
}

fn setup() -> (CommandDispatcher, Arc<StubRoblox>) {
    ensure_init();
    let roblox = Arc::new(StubRoblox::new());
    let service = DirectoryService::new(Arc::new(MemoryStore::new()), roblox.clone(), roblox.clone())
        .with_presence_concurrency(2);
    (CommandDispatcher::new(service), roblox)
}

fn cmd(name: &str, args: &[&str]) -> DirectoryCommand {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    DirectoryCommand::parse(name, &args).expect("valid command")
}

#[tokio::test]
async fn test_create_add_show_scenario() {
    let (dispatcher, _) = setup();
    let link = "https://roblox.com/users/123/profile";

    assert_eq!(
        dispatcher.execute(cmd("create_directory", &["guild-a"])).await,
        "Directory 'guild-a' created successfully."
    );
    assert_eq!(
        dispatcher.execute(cmd("add_user", &["guild-a", link])).await,
        "User 'Alice' added to the directory 'guild-a'."
    );

    let listing = dispatcher.execute(cmd("show_directory", &["guild-a"])).await;
    let members: Vec<&str> = listing.lines().skip(1).collect();
    assert_eq!(members.len(), 1);
    assert!(members[0].contains("Alice"));
    assert!(members[0].contains(link));
}

#[tokio::test]
async fn test_online_users_for_ghost_never_polls() {
    let (dispatcher, roblox) = setup();
    assert_eq!(
        dispatcher.execute(cmd("show_online_users", &["ghost"])).await,
        "No users found in the directory 'ghost'."
    );
    assert_eq!(roblox.presence_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_online_users_lists_only_in_game_members() {
    let (dispatcher, roblox) = setup();
    dispatcher.execute(cmd("add_user", &["squad", "https://www.roblox.com/users/123/profile"])).await;
    dispatcher.execute(cmd("add_user", &["squad", "https://www.roblox.com/users/456/profile"])).await;

    let reply = dispatcher.execute(cmd("show_online_users", &["squad"])).await;
    assert_eq!(
        reply,
        "Online users in 'squad':\n- Username: Bob, Profile Link: https://www.roblox.com/users/456/profile\n"
    );
    assert_eq!(roblox.presence_calls.load(Ordering::SeqCst), 2);

    dispatcher.execute(cmd("remove_user", &["squad", "Bob"])).await;
    assert_eq!(
        dispatcher.execute(cmd("show_online_users", &["squad"])).await,
        "No users are currently online in the directory 'squad'."
    );
}

#[tokio::test]
async fn test_duplicate_adds_and_removal() {
    let (dispatcher, _) = setup();
    let link = "https://www.roblox.com/users/123/profile";
    dispatcher.execute(cmd("add_user", &["dupes", link])).await;
    dispatcher.execute(cmd("add_user", &["dupes", link])).await;

    let listing = dispatcher.execute(cmd("show_directory", &["dupes"])).await;
    assert_eq!(listing.lines().count(), 3);

    assert_eq!(
        dispatcher.execute(cmd("remove_user", &["dupes", "Alice"])).await,
        "User 'Alice' removed from the directory 'dupes'."
    );
    let listing = dispatcher.execute(cmd("show_directory", &["dupes"])).await;
    assert_eq!(listing.lines().count(), 2);

    assert_eq!(
        dispatcher.execute(cmd("remove_user", &["dupes", "Nobody"])).await,
        "User 'Nobody' not found in the directory 'dupes'."
    );
    assert_eq!(dispatcher.execute(cmd("show_directory", &["dupes"])).await, listing);
}

#[tokio::test]
async fn test_failure_replies() {
    let (dispatcher, _) = setup();
    assert_eq!(
        dispatcher.execute(cmd("add_user", &["g", "https://example.com/users/1"])).await,
        "Invalid profile link. Please provide a valid Roblox profile link."
    );
    assert_eq!(
        dispatcher.execute(cmd("add_user", &["g", "https://roblox.com/users/999/profile"])).await,
        "Unable to fetch username. Please try again."
    );
    assert_eq!(
        dispatcher.execute(cmd("delete_directory", &["g"])).await,
        "Directory 'g' does not exist."
    );
    assert_eq!(
        dispatcher.execute(cmd("remove_user", &["g", "Alice"])).await,
        "Directory 'g' does not exist."
    );
}

#[tokio::test]
async fn test_console_text_reaches_the_store() {
    let (dispatcher, _) = setup();
    let parser = MessageParser::new("!");

    let reply = dispatcher
        .process(&parser.parse("console", r#"/create_directory "night shift""#, None))
        .await;
    assert_eq!(reply.as_deref(), Some("Directory 'night shift' created successfully."));

    let reply = dispatcher
        .process(&parser.parse("console", r#"!create_directory "night shift""#, None))
        .await;
    assert_eq!(reply.as_deref(), Some("Directory 'night shift' already exists."));
}
