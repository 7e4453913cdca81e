// Integration tests for the full installation procedure
// Each test installs into a fresh in-memory database and a temp app root

use chrono::DateTime;
use fluxbb_installer::config_file::load_config;
use fluxbb_installer::db::repositories::{
    CategoryRepository, ConfigRepository, ForumRepository, GroupRepository, UserRepository,
};
use fluxbb_installer::db::Database;
use fluxbb_installer::seed::{board_options, default_groups};
use fluxbb_installer::{
    DemoContent, InstallEnvironment, InstallError, InstallPlan, Installer, SeedStrings,
    FORUM_VERSION,
};
use fluxbb_types::{AdminAccount, BoardInfo, DatabaseConfig, Group, OptionValue};
use std::net::{IpAddr, Ipv4Addr};
use tempfile::TempDir;

fn environment(file_uploads: &str) -> InstallEnvironment {
    InstallEnvironment {
        locale: "en".to_string(),
        request_time: DateTime::from_timestamp(1_712_345_678, 0).unwrap(),
        client_ip: IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20)),
        file_uploads: Some(file_uploads.to_string()),
    }
}

fn plan() -> InstallPlan {
    InstallPlan {
        database: DatabaseConfig::sqlite(":memory:"),
        board: BoardInfo {
            title: "My FluxBB forum".to_string(),
            description: "Unfortunately no one can be told what FluxBB is".to_string(),
            default_style: "Air".to_string(),
            admin_email: "admin@example.com".to_string(),
            webmaster_email: None,
            mailing_list: None,
        },
        admin: AdminAccount {
            username: "Admin".to_string(),
            password: "p4ss w0rd!".to_string(),
            email: "Admin@Example.com".to_string(),
        },
        environment: environment("1"),
        strings: SeedStrings::english(),
        demo: DemoContent::default(),
    }
}

fn fresh_installer() -> (TempDir, Installer) {
    let temp_dir = TempDir::new().unwrap();
    let db = Database::in_memory().unwrap();
    let installer = Installer::new(db, temp_dir.path());
    (temp_dir, installer)
}

/// Tables plus default groups, the state option seeding expects
fn installer_with_groups() -> (TempDir, Installer) {
    let (temp_dir, installer) = fresh_installer();
    installer.create_database_tables().unwrap();
    installer
        .create_user_groups(&default_groups(&SeedStrings::english()))
        .unwrap();
    (temp_dir, installer)
}

/// Every row `plan()` must produce in the config table, in insert order
fn expected_options() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("o_cur_version", Some(FORUM_VERSION)),
        ("o_board_title", Some("My FluxBB forum")),
        ("o_board_desc", Some("Unfortunately no one can be told what FluxBB is")),
        ("o_default_timezone", Some("0")),
        ("o_time_format", Some("H:i:s")),
        ("o_date_format", Some("Y-m-d")),
        ("o_timeout_visit", Some("1800")),
        ("o_timeout_online", Some("300")),
        ("o_redirect_delay", Some("1")),
        ("o_show_version", Some("0")),
        ("o_show_user_info", Some("1")),
        ("o_show_post_count", Some("1")),
        ("o_signatures", Some("1")),
        ("o_smilies", Some("1")),
        ("o_smilies_sig", Some("1")),
        ("o_make_links", Some("1")),
        ("o_default_lang", Some("en")),
        ("o_default_style", Some("Air")),
        ("o_default_user_group", Some("4")),
        ("o_topic_review", Some("15")),
        ("o_disp_topics_default", Some("30")),
        ("o_disp_posts_default", Some("25")),
        ("o_indent_num_spaces", Some("4")),
        ("o_quote_depth", Some("3")),
        ("o_quickpost", Some("1")),
        ("o_users_online", Some("1")),
        ("o_censoring", Some("0")),
        ("o_show_dot", Some("0")),
        ("o_topic_views", Some("1")),
        ("o_quickjump", Some("1")),
        ("o_gzip", Some("0")),
        ("o_additional_navlinks", Some("")),
        ("o_report_method", Some("0")),
        ("o_regs_report", Some("0")),
        ("o_default_email_setting", Some("1")),
        ("o_mailing_list", Some("admin@example.com")),
        ("o_avatars", Some("1")),
        ("o_avatars_dir", Some("img/avatars")),
        ("o_avatars_width", Some("60")),
        ("o_avatars_height", Some("60")),
        ("o_avatars_size", Some("10240")),
        ("o_search_all_forums", Some("1")),
        ("o_admin_email", Some("admin@example.com")),
        ("o_webmaster_email", Some("admin@example.com")),
        ("o_forum_subscriptions", Some("1")),
        ("o_topic_subscriptions", Some("1")),
        ("o_smtp_host", None),
        ("o_smtp_user", None),
        ("o_smtp_pass", None),
        ("o_smtp_ssl", Some("0")),
        ("o_regs_allow", Some("1")),
        ("o_regs_verify", Some("0")),
        ("o_announcement", Some("0")),
        ("o_announcement_message", Some("Enter your announcement here.")),
        ("o_rules", Some("0")),
        ("o_rules_message", Some("Enter your rules here")),
        ("o_maintenance", Some("0")),
        (
            "o_maintenance_message",
            Some("The forums are temporarily down for maintenance. Please try again in a few minutes."),
        ),
        ("o_default_dst", Some("0")),
        ("o_feed_type", Some("2")),
        ("o_feed_ttl", Some("0")),
        ("p_message_bbcode", Some("1")),
        ("p_message_img_tag", Some("1")),
        ("p_message_all_caps", Some("1")),
        ("p_subject_all_caps", Some("1")),
        ("p_sig_all_caps", Some("1")),
        ("p_sig_bbcode", Some("1")),
        ("p_sig_img_tag", Some("0")),
        ("p_sig_length", Some("400")),
        ("p_sig_lines", Some("4")),
        ("p_allow_banned_email", Some("1")),
        ("p_allow_dupe_email", Some("0")),
        ("p_force_guest_email", Some("1")),
    ]
}

fn owned(rows: Vec<(&str, Option<&str>)>) -> Vec<(String, Option<String>)> {
    rows.into_iter()
        .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
        .collect()
}

#[test]
fn test_group_seeder_creates_three_groups() {
    let (_dir, installer) = fresh_installer();
    installer.create_database_tables().unwrap();
    installer
        .create_user_groups(&default_groups(&SeedStrings::english()))
        .unwrap();

    let groups = GroupRepository::new(installer.database().pool.clone())
        .list_all()
        .unwrap();
    assert_eq!(
        groups,
        vec![
            Group::new(1, "Administrators"),
            Group::new(2, "Moderators"),
            Group::new(4, "Members"),
        ]
    );
}

#[test]
fn test_group_seeder_is_not_idempotent() {
    let (_dir, installer) = fresh_installer();
    installer.create_database_tables().unwrap();
    let groups = default_groups(&SeedStrings::english());
    installer.create_user_groups(&groups).unwrap();
    installer.create_user_groups(&groups).unwrap();

    let stored = GroupRepository::new(installer.database().pool.clone())
        .list_all()
        .unwrap();
    assert_eq!(stored.len(), 6);
}

#[test]
fn test_board_option_seeder_persists_fixed_table() {
    let (_dir, installer) = installer_with_groups();
    let plan = plan();
    let options = board_options(&plan.board, &plan.environment, &plan.strings);
    installer.set_board_info(&options).unwrap();

    let rows = ConfigRepository::new(installer.database().pool.clone())
        .list_all()
        .unwrap();
    assert_eq!(rows.len(), 73);
    assert_eq!(rows, owned(expected_options()));
}

#[test]
fn test_board_options_need_member_group() {
    let (_dir, installer) = fresh_installer();
    installer.create_database_tables().unwrap();
    let plan = plan();
    let options = board_options(&plan.board, &plan.environment, &plan.strings);

    let err = installer.set_board_info(&options).unwrap_err();
    assert!(matches!(err, InstallError::MissingDefaultGroup(4)));
}

#[test]
fn test_avatar_option_follows_upload_flag() {
    for (flag, expected) in [("On", "1"), ("true", "1"), ("1", "1"), ("off", "0"), ("", "0")] {
        let (_dir, installer) = installer_with_groups();
        let plan = plan();
        let options = board_options(&plan.board, &environment(flag), &plan.strings);
        installer.set_board_info(&options).unwrap();

        let value = ConfigRepository::new(installer.database().pool.clone())
            .get("o_avatars")
            .unwrap();
        assert_eq!(value, Some(Some(expected.to_string())), "flag {flag:?}");
    }
}

#[test]
fn test_admin_user_after_groups() {
    let (_dir, installer) = fresh_installer();
    installer.create_database_tables().unwrap();
    installer
        .create_user_groups(&default_groups(&SeedStrings::english()))
        .unwrap();

    let plan = plan();
    let admin = installer
        .create_admin_user(&plan.admin, &plan.environment, "Air")
        .unwrap();

    let users = UserRepository::new(installer.database().pool.clone())
        .list_all()
        .unwrap();
    assert_eq!(users, vec![admin.clone()]);
    assert_eq!(admin.group_id, Group::ADMIN);
    assert_eq!(admin.username, "Admin");
    assert_eq!(admin.email, "Admin@Example.com");
    assert_eq!(admin.password, "p4ss w0rd!");
    assert_eq!(admin.language, "en");
    assert_eq!(admin.style, "Air");
    assert_eq!(admin.registered, 1_712_345_678);
    assert_eq!(admin.last_visit, 1_712_345_678);
    assert_eq!(admin.registration_ip, "192.168.1.20");
}

#[test]
fn test_demo_forum_links_to_category() {
    let (_dir, installer) = fresh_installer();
    installer.create_database_tables().unwrap();
    let (category, forum) = installer.create_demo_forum(&DemoContent::default()).unwrap();

    let pool = installer.database().pool.clone();
    let categories = CategoryRepository::new(pool.clone()).list_all().unwrap();
    let forums = ForumRepository::new(pool).list_all().unwrap();

    assert_eq!(categories, vec![category.clone()]);
    assert_eq!(forums, vec![forum.clone()]);
    assert_eq!(category.cat_name, "Test category");
    assert_eq!(forum.forum_name, "Test forum");
    assert_eq!(forum.forum_desc.as_deref(), Some("Your first forum for testing."));
    assert_eq!(forum.cat_id, category.id);
}

#[test]
fn test_full_install() {
    let (dir, installer) = fresh_installer();
    let plan = plan();

    let report = installer.install(&plan).unwrap();

    assert_eq!(report.tables_created, 14);
    assert_eq!(report.groups_created, 3);
    assert_eq!(report.options_inserted, 73);
    assert_eq!(report.forum.cat_id, report.category.id);
    assert_eq!(report.admin.group_id, Group::ADMIN);

    let config = load_config(&dir.path().join("config").join("fluxbb.json")).unwrap();
    assert_eq!(config.database, plan.database);
    assert_eq!(config.route_prefix, "");

    let options = ConfigRepository::new(installer.database().pool.clone());
    assert_eq!(options.list_all().unwrap(), owned(expected_options()));
    assert_eq!(
        options.get("o_default_user_group").unwrap(),
        Some(OptionValue::Int(Group::MEMBER).to_db_value())
    );
}

#[test]
fn test_install_twice_duplicates_rows() {
    let (_dir, installer) = fresh_installer();
    let plan = plan();

    installer.install(&plan).unwrap();
    installer.install(&plan).unwrap();

    let pool = installer.database().pool.clone();
    assert_eq!(GroupRepository::new(pool.clone()).list_all().unwrap().len(), 6);
    assert_eq!(CategoryRepository::new(pool.clone()).list_all().unwrap().len(), 2);
    assert_eq!(ForumRepository::new(pool.clone()).list_all().unwrap().len(), 2);
    assert_eq!(UserRepository::new(pool.clone()).list_all().unwrap().len(), 2);
    assert_eq!(ConfigRepository::new(pool).list_all().unwrap().len(), 146);
}

#[test]
fn test_install_into_sqlite_file() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("fluxbb.db");
    let mut plan = plan();
    plan.database = DatabaseConfig::sqlite(db_path.to_string_lossy());

    let db = Database::from_config(&plan.database).unwrap();
    let installer = Installer::new(db, temp_dir.path());
    installer.install(&plan).unwrap();

    // Reopen to make sure everything was written to disk
    let reopened = Database::from_config(&plan.database).unwrap();
    let users = UserRepository::new(reopened.pool.clone()).list_all().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "Admin");
}
