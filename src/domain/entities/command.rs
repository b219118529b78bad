use crate::application::errors::CommandError;

/// Describes one bot command and the arguments it expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub args: &'static [&'static str],
}

impl CommandSpec {
    pub fn usage(&self) -> String {
        let mut usage = format!("/{}", self.name);
        for arg in self.args {
            usage.push_str(&format!(" <{}>", arg));
        }
        usage
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input)
    }
}

/// Every command the bot exposes, in registration order
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "add_user",
        description: "Add a user to a specific directory using their profile link.",
        args: &["directory_name", "profile_link"],
    },
    CommandSpec {
        name: "show_directory",
        description: "Show all users in a specific directory.",
        args: &["directory_name"],
    },
    CommandSpec {
        name: "show_online_users",
        description: "Show all online users in a directory.",
        args: &["directory_name"],
    },
    CommandSpec {
        name: "remove_user",
        description: "Remove a user from a specific directory.",
        args: &["directory_name", "username"],
    },
    CommandSpec {
        name: "create_directory",
        description: "Create a new directory.",
        args: &["directory_name"],
    },
    CommandSpec {
        name: "delete_directory",
        description: "Delete a directory.",
        args: &["directory_name"],
    },
];

/// Look up a command by name (case-insensitive)
pub fn find_command(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|c| c.matches(name))
}

/// A fully-parsed directory command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCommand {
    AddUser { directory: String, profile_link: String },
    ShowDirectory { directory: String },
    ShowOnlineUsers { directory: String },
    RemoveUser { directory: String, username: String },
    CreateDirectory { directory: String },
    DeleteDirectory { directory: String },
}

impl DirectoryCommand {
    /// Build a command from its name and positional arguments
    pub fn parse(name: &str, args: &[String]) -> Result<Self, CommandError> {
        let spec = find_command(name).ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        if args.len() < spec.args.len() || args.iter().take(spec.args.len()).any(|a| a.is_empty()) {
            return Err(CommandError::InvalidArgs(spec.usage()));
        }

        let directory = args[0].clone();
        let command = match spec.name {
            "add_user" => DirectoryCommand::AddUser {
                directory,
                profile_link: args[1].clone(),
            },
            "show_directory" => DirectoryCommand::ShowDirectory { directory },
            "show_online_users" => DirectoryCommand::ShowOnlineUsers { directory },
            "remove_user" => DirectoryCommand::RemoveUser {
                directory,
                username: args[1].clone(),
            },
            "create_directory" => DirectoryCommand::CreateDirectory { directory },
            "delete_directory" => DirectoryCommand::DeleteDirectory { directory },
            other => return Err(CommandError::NotFound(other.to_string())),
        };

        Ok(command)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DirectoryCommand::AddUser { .. } => "add_user",
            DirectoryCommand::ShowDirectory { .. } => "show_directory",
            DirectoryCommand::ShowOnlineUsers { .. } => "show_online_users",
            DirectoryCommand::RemoveUser { .. } => "remove_user",
            DirectoryCommand::CreateDirectory { .. } => "create_directory",
            DirectoryCommand::DeleteDirectory { .. } => "delete_directory",
        }
    }

    pub fn directory(&self) -> &str {
        match self {
            DirectoryCommand::AddUser { directory, .. }
            | DirectoryCommand::ShowDirectory { directory }
            | DirectoryCommand::ShowOnlineUsers { directory }
            | DirectoryCommand::RemoveUser { directory, .. }
            | DirectoryCommand::CreateDirectory { directory }
            | DirectoryCommand::DeleteDirectory { directory } => directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_add_user() {
        let cmd = DirectoryCommand::parse("add_user", &args(&["guild-a", "https://roblox.com/users/1/profile"]))
            .unwrap();
        assert_eq!(
            cmd,
            DirectoryCommand::AddUser {
                directory: "guild-a".to_string(),
                profile_link: "https://roblox.com/users/1/profile".to_string(),
            }
        );
        assert_eq!(cmd.name(), "add_user");
        assert_eq!(cmd.directory(), "guild-a");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let cmd = DirectoryCommand::parse("Create_Directory", &args(&["x"])).unwrap();
        assert_eq!(cmd, DirectoryCommand::CreateDirectory { directory: "x".to_string() });
    }

    #[test]
    fn test_parse_missing_args_reports_usage() {
        let err = DirectoryCommand::parse("remove_user", &args(&["guild-a"])).unwrap_err();
        assert_eq!(
            err,
            CommandError::InvalidArgs("/remove_user <directory_name> <username>".to_string())
        );
        assert_eq!(err.to_string(), "Usage: /remove_user <directory_name> <username>");
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = DirectoryCommand::parse("ban", &[]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: /ban");
    }

    #[test]
    fn test_registry_has_six_commands() {
        assert_eq!(COMMANDS.len(), 6);
        assert!(find_command("show_online_users").is_some());
    }
}
