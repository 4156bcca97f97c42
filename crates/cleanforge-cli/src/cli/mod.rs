//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cleanforge",
    bin_name = "cleanforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Clean-architecture scaffolding for TypeScript services",
    long_about = "Cleanforge generates clean-architecture TypeScript web services \
                  and grows them one artifact at a time: entities, contracts, \
                  services, controllers, and ORM adapters.",
    after_help = "EXAMPLES:\n\
        \x20 cleanforge new my-api --database mongo\n\
        \x20 cleanforge entity --name user\n\
        \x20 cleanforge adapter-orm --name user --orm mongo\n\
        \x20 cleanforge completions bash > /usr/share/bash-completion/completions/cleanforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "n",
        about = "Create a new clean-architecture project",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge new my-api\n\
            \x20 cleanforge new my-api --database postgres --yes\n\
            \x20 cleanforge new services/my-api --database mongo --skip-install"
    )]
    New(NewArgs),

    /// Generate an entity model plus its repository gateway.
    #[command(
        about = "Generate a domain entity and its gateway contract",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge entity --name user\n\
            \x20 cleanforge entity --name user-profile"
    )]
    Entity(EntityArgs),

    /// Generate a standalone interface contract.
    #[command(
        about = "Generate an interface contract",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge interface --name user --path entities\n\
            \x20 cleanforge interface --name notifier --path infra"
    )]
    Interface(InterfaceArgs),

    /// Generate a CRUD repository contract for an existing entity.
    #[command(
        name = "interface-resource",
        about = "Generate a CRUD repository contract for an entity",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge interface-resource --name user"
    )]
    InterfaceResource(InterfaceResourceArgs),

    /// Generate a service contract and its implementation.
    #[command(
        about = "Generate a use-case service (contract + impl)",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge service --name user"
    )]
    Service(ServiceArgs),

    /// Generate a CRUD service contract and its implementation.
    #[command(
        name = "service-resource",
        about = "Generate a CRUD service (contract + impl)",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge service-resource --name user"
    )]
    ServiceResource(ServiceResourceArgs),

    /// Generate an API controller.
    #[command(
        about = "Generate an entry-point controller",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge controller --name user"
    )]
    Controller(ControllerArgs),

    /// Generate a plain driven adapter.
    #[command(
        about = "Generate a simple driven adapter",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge adapter --name mailer"
    )]
    Adapter(AdapterArgs),

    /// Generate an ORM adapter, model, and singleton wiring.
    #[command(
        name = "adapter-orm",
        about = "Generate an ORM repository adapter for an entity",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge adapter-orm --name user --orm mongo\n\
            \x20 cleanforge adapter-orm --name user --orm sequelize --manager mysql"
    )]
    AdapterOrm(AdapterOrmArgs),

    /// Generate a database connection helper and server entry.
    #[command(
        about = "Wire a database helper into the project",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge database --database mysql\n\
            \x20 cleanforge database --database mongo --skip-install"
    )]
    Database(DatabaseArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cleanforge completions bash > ~/.local/share/bash-completion/completions/cleanforge\n\
            \x20 cleanforge completions zsh  > ~/.zfunc/_cleanforge\n\
            \x20 cleanforge completions fish > ~/.config/fish/completions/cleanforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the cleanforge configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cleanforge config get defaults.database\n\
            \x20 cleanforge config set defaults.database postgres\n\
            \x20 cleanforge config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `cleanforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name or path.  A plain name creates `./name`; a path like
    /// `services/foo` places the project under `services/`.
    #[arg(value_name = "NAME", help = "Project name or path")]
    pub name: String,

    /// Database the generated project connects to.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database backend (defaults to the configured default)"
    )]
    pub database: Option<Database>,

    /// Skip `npm install` after writing the tree.
    #[arg(long = "skip-install", help = "Do not run npm install")]
    pub skip_install: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Proceed even when the target directory exists.
    #[arg(long = "force", help = "Scaffold into an existing directory")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── artifact generators ───────────────────────────────────────────────────────

/// Arguments for `cleanforge entity`.
#[derive(Debug, Args)]
pub struct EntityArgs {
    /// Resource name in kebab case, e.g. `user-profile`.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,
}

/// Arguments for `cleanforge interface`.
#[derive(Debug, Args)]
pub struct InterfaceArgs {
    /// Resource name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// Layer the contract belongs to.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "LAYER",
        value_enum,
        default_value = "entities",
        help = "Where the contract lives"
    )]
    pub path: InterfacePath,
}

/// Arguments for `cleanforge interface-resource`.
#[derive(Debug, Args)]
pub struct InterfaceResourceArgs {
    /// Resource name.  The matching entity must already exist.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,
}

/// Arguments for `cleanforge service`.
#[derive(Debug, Args)]
pub struct ServiceArgs {
    /// Resource name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,
}

/// Arguments for `cleanforge service-resource`.
#[derive(Debug, Args)]
pub struct ServiceResourceArgs {
    /// Resource name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,
}

/// Arguments for `cleanforge controller`.
#[derive(Debug, Args)]
pub struct ControllerArgs {
    /// Resource name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,
}

/// Arguments for `cleanforge adapter`.
#[derive(Debug, Args)]
pub struct AdapterArgs {
    /// Resource name.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,
}

/// Arguments for `cleanforge adapter-orm`.
#[derive(Debug, Args)]
pub struct AdapterOrmArgs {
    /// Resource name.  The matching entity must already exist.
    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// ORM flavour.
    #[arg(short = 'o', long = "orm", value_name = "ORM", value_enum, help = "ORM kind")]
    pub orm: Orm,

    /// Connection manager.  Required for sequelize; implied for mongo.
    #[arg(
        short = 'm',
        long = "manager",
        value_name = "MANAGER",
        value_enum,
        help = "Connection manager (mysql, postgres, mongoose)"
    )]
    pub manager: Option<ManagerArg>,

    /// Skip `npm install` after patching package.json.
    #[arg(long = "skip-install", help = "Do not run npm install")]
    pub skip_install: bool,
}

// ── database ──────────────────────────────────────────────────────────────────

/// Arguments for `cleanforge database`.
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    /// Database backend.
    #[arg(
        short = 'd',
        long = "database",
        value_name = "DATABASE",
        value_enum,
        help = "Database backend"
    )]
    pub database: Database,

    /// Skip `npm install` after patching package.json.
    #[arg(long = "skip-install", help = "Do not run npm install")]
    pub skip_install: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cleanforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cleanforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.database`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported database backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Database {
    /// Also accepted as `mongodb`.
    #[value(alias = "mongodb")]
    Mongo,
    Mysql,
    /// Also accepted as `pg`.
    #[value(alias = "pg")]
    Postgres,
}

impl std::fmt::Display for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mongo => write!(f, "mongo"),
            Self::Mysql => write!(f, "mysql"),
            Self::Postgres => write!(f, "postgres"),
        }
    }
}

/// Supported ORM flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Orm {
    /// Also accepted as `mongoose`.
    #[value(alias = "mongoose")]
    Mongo,
    Sequelize,
}

impl std::fmt::Display for Orm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mongo => write!(f, "mongo"),
            Self::Sequelize => write!(f, "sequelize"),
        }
    }
}

/// Supported connection managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ManagerArg {
    Mysql,
    /// Also accepted as `pg`.
    #[value(alias = "pg")]
    Postgres,
    Mongoose,
}

impl std::fmt::Display for ManagerArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mysql => write!(f, "mysql"),
            Self::Postgres => write!(f, "postgres"),
            Self::Mongoose => write!(f, "mongoose"),
        }
    }
}

/// Layer choices for the `interface` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InterfacePath {
    Entities,
    Service,
    Infra,
}

impl std::fmt::Display for InterfacePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entities => write!(f, "entities"),
            Self::Service => write!(f, "service"),
            Self::Infra => write!(f, "infra"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn database_display() {
        assert_eq!(Database::Mongo.to_string(), "mongo");
        assert_eq!(Database::Mysql.to_string(), "mysql");
        assert_eq!(Database::Postgres.to_string(), "postgres");
    }

    #[test]
    fn orm_display() {
        assert_eq!(Orm::Mongo.to_string(), "mongo");
        assert_eq!(Orm::Sequelize.to_string(), "sequelize");
    }

    #[test]
    fn manager_display() {
        assert_eq!(ManagerArg::Mysql.to_string(), "mysql");
        assert_eq!(ManagerArg::Postgres.to_string(), "postgres");
        assert_eq!(ManagerArg::Mongoose.to_string(), "mongoose");
    }

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["cleanforge", "new", "my-api", "--database", "mongo"]);
        assert!(matches!(cli.command, Commands::New(_)));
    }

    #[test]
    fn mongodb_alias() {
        let cli = Cli::parse_from(["cleanforge", "new", "my-api", "-d", "mongodb", "--yes"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.database, Some(Database::Mongo));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn mongoose_orm_alias() {
        let cli = Cli::parse_from(["cleanforge", "adapter-orm", "--name", "user", "--orm", "mongoose"]);
        if let Commands::AdapterOrm(args) = cli.command {
            assert_eq!(args.orm, Orm::Mongo);
            assert!(args.manager.is_none());
        } else {
            panic!("expected AdapterOrm command");
        }
    }

    #[test]
    fn interface_defaults_to_entities() {
        let cli = Cli::parse_from(["cleanforge", "interface", "--name", "user"]);
        if let Commands::Interface(args) = cli.command {
            assert_eq!(args.path, InterfacePath::Entities);
        } else {
            panic!("expected Interface command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["cleanforge", "--quiet", "--verbose", "entity", "-n", "u"]);
        assert!(result.is_err());
    }
}
