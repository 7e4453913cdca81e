use std::path::{Path, PathBuf};

use fluxbb_types::{
    AdminAccount, BoardInfo, BoardOption, Category, DatabaseConfig, Forum, Group, NewUser, User,
};

use crate::config_file;
use crate::db::repositories::{
    CategoryRepository, ConfigRepository, ForumRepository, GroupRepository, UserRepository,
};
use crate::db::{install_migrations, Database, Migration};
use crate::environment::InstallEnvironment;
use crate::error::{InstallError, InstallResult};
use crate::seed::{self, DemoContent, SeedStrings};

/// Everything the setup flow collected before installing
#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub database: DatabaseConfig,
    pub board: BoardInfo,
    pub admin: AdminAccount,
    pub environment: InstallEnvironment,
    pub strings: SeedStrings,
    pub demo: DemoContent,
}

/// Outcome of a completed installation
#[derive(Debug, Clone, PartialEq)]
pub struct InstallReport {
    pub config_path: PathBuf,
    pub tables_created: usize,
    pub groups_created: usize,
    pub options_inserted: usize,
    pub admin: User,
    pub category: Category,
    pub forum: Forum,
}

/// Runs the installation steps against one database.
///
/// Steps are meant to run once, in order, against an empty database and
/// config directory. Nothing is rolled back when a step fails.
pub struct Installer {
    db: Database,
    config_path: PathBuf,
    migrations: Vec<Box<dyn Migration>>,
}

impl Installer {
    /// Installer for an application rooted at `root`
    pub fn new<P: AsRef<Path>>(db: Database, root: P) -> Self {
        Self {
            db,
            config_path: config_file::config_path(root),
            migrations: install_migrations(),
        }
    }

    /// Replace the schema units applied by `create_database_tables`
    pub fn with_migrations(mut self, migrations: Vec<Box<dyn Migration>>) -> Self {
        self.migrations = migrations;
        self
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Run every step in order, stopping at the first failure
    pub fn install(&self, plan: &InstallPlan) -> InstallResult<InstallReport> {
        self.write_database_config(&plan.database)?;
        let tables_created = self.create_database_tables()?;

        let groups = seed::default_groups(&plan.strings);
        self.create_user_groups(&groups)?;

        let options = seed::board_options(&plan.board, &plan.environment, &plan.strings);
        self.set_board_info(&options)?;

        let admin = self.create_admin_user(
            &plan.admin,
            &plan.environment,
            &plan.board.default_style,
        )?;
        let (category, forum) = self.create_demo_forum(&plan.demo)?;

        tracing::info!("Installation finished");

        Ok(InstallReport {
            config_path: self.config_path.clone(),
            tables_created,
            groups_created: groups.len(),
            options_inserted: options.len(),
            admin,
            category,
            forum,
        })
    }

    /// Persist the database settings to the forum config file
    pub fn write_database_config(&self, database: &DatabaseConfig) -> InstallResult<()> {
        config_file::write_config(&self.config_path, database)?;
        Ok(())
    }

    /// Apply each schema unit in order; returns how many were applied
    pub fn create_database_tables(&self) -> InstallResult<usize> {
        let conn = self.db.connection()?;
        for migration in &self.migrations {
            tracing::debug!("Creating table {}", migration.name());
            migration.up(&conn)?;
        }

        tracing::info!("Created {} tables", self.migrations.len());
        Ok(self.migrations.len())
    }

    /// Insert the preset groups
    pub fn create_user_groups(&self, groups: &[Group]) -> InstallResult<()> {
        let repo = GroupRepository::new(self.db.pool.clone());
        for group in groups {
            repo.create(group)?;
        }

        tracing::info!("Created {} user groups", groups.len());
        Ok(())
    }

    /// Insert one config row per board option; the member group must already exist
    pub fn set_board_info(&self, options: &[BoardOption]) -> InstallResult<()> {
        let groups = GroupRepository::new(self.db.pool.clone());
        if groups.find_by_id(Group::MEMBER)?.is_none() {
            return Err(InstallError::MissingDefaultGroup(Group::MEMBER));
        }

        let repo = ConfigRepository::new(self.db.pool.clone());
        for option in options {
            repo.insert(option)?;
        }

        tracing::info!("Inserted {} board options", options.len());
        Ok(())
    }

    /// Create the administrator account; the admin group must already exist
    pub fn create_admin_user(
        &self,
        admin: &AdminAccount,
        env: &InstallEnvironment,
        style: &str,
    ) -> InstallResult<User> {
        let groups = GroupRepository::new(self.db.pool.clone());
        if groups.find_by_id(Group::ADMIN)?.is_none() {
            return Err(InstallError::MissingAdminGroup(Group::ADMIN));
        }

        let timestamp = env.request_timestamp();
        let user = NewUser {
            username: admin.username.clone(),
            password: admin.password.clone(),
            email: admin.email.clone(),
            language: env.locale.clone(),
            style: style.to_string(),
            registered: timestamp,
            registration_ip: env.client_ip.to_string(),
            last_visit: timestamp,
            group_id: Group::ADMIN,
        };

        let created = UserRepository::new(self.db.pool.clone()).create(&user)?;
        tracing::info!("Created admin user {} (id {})", created.username, created.id);
        Ok(created)
    }

    /// Create the demo category and its first forum
    pub fn create_demo_forum(&self, demo: &DemoContent) -> InstallResult<(Category, Forum)> {
        let category = CategoryRepository::new(self.db.pool.clone())
            .create(&demo.category_name, demo.category_position)?;

        let forum = ForumRepository::new(self.db.pool.clone()).create_in_category(
            category.id,
            &demo.forum_name,
            Some(&demo.forum_desc),
            demo.forum_position,
        )?;

        tracing::info!("Created demo category {} with forum {}", category.id, forum.id);
        Ok((category, forum))
    }
}
