//! Fixed seed tables: default groups, board options and demo content.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use fluxbb_types::{BoardInfo, BoardOption, Group};

use crate::environment::InstallEnvironment;
use crate::error::{InstallError, InstallResult};
use crate::FORUM_VERSION;

/// Translated strings written into seed rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedStrings {
    pub administrators: String,
    pub moderators: String,
    pub members: String,
    pub announcement: String,
    pub rules: String,
    pub maintenance_message: String,
}

impl Default for SeedStrings {
    fn default() -> Self {
        Self::english()
    }
}

impl SeedStrings {
    pub fn english() -> Self {
        Self {
            administrators: "Administrators".to_string(),
            moderators: "Moderators".to_string(),
            members: "Members".to_string(),
            announcement: "Enter your announcement here.".to_string(),
            rules: "Enter your rules here".to_string(),
            maintenance_message:
                "The forums are temporarily down for maintenance. Please try again in a few minutes."
                    .to_string(),
        }
    }

    /// Load a JSON translation file; missing keys keep their English text
    pub fn load(path: &Path) -> InstallResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| InstallError::SeedStringsRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| InstallError::SeedStrings {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// The three preset groups
pub fn default_groups(strings: &SeedStrings) -> Vec<Group> {
    vec![
        Group::new(Group::ADMIN, &strings.administrators),
        Group::new(Group::MODERATOR, &strings.moderators),
        Group::new(Group::MEMBER, &strings.members),
    ]
}

/// Default board options for a fresh install
pub fn board_options(
    board: &BoardInfo,
    env: &InstallEnvironment,
    strings: &SeedStrings,
) -> Vec<BoardOption> {
    let avatars: i64 = if env.uploads_enabled() { 1 } else { 0 };

    vec![
        BoardOption::new("o_cur_version", FORUM_VERSION),
        BoardOption::new("o_board_title", board.title.as_str()),
        BoardOption::new("o_board_desc", board.description.as_str()),
        BoardOption::new("o_default_timezone", 0),
        BoardOption::new("o_time_format", "H:i:s"),
        BoardOption::new("o_date_format", "Y-m-d"),
        BoardOption::new("o_timeout_visit", 1800),
        BoardOption::new("o_timeout_online", 300),
        BoardOption::new("o_redirect_delay", 1),
        BoardOption::new("o_show_version", 0),
        BoardOption::new("o_show_user_info", 1),
        BoardOption::new("o_show_post_count", 1),
        BoardOption::new("o_signatures", 1),
        BoardOption::new("o_smilies", 1),
        BoardOption::new("o_smilies_sig", 1),
        BoardOption::new("o_make_links", 1),
        BoardOption::new("o_default_lang", env.locale.as_str()),
        BoardOption::new("o_default_style", board.default_style.as_str()),
        BoardOption::new("o_default_user_group", Group::MEMBER),
        BoardOption::new("o_topic_review", 15),
        BoardOption::new("o_disp_topics_default", 30),
        BoardOption::new("o_disp_posts_default", 25),
        BoardOption::new("o_indent_num_spaces", 4),
        BoardOption::new("o_quote_depth", 3),
        BoardOption::new("o_quickpost", 1),
        BoardOption::new("o_users_online", 1),
        BoardOption::new("o_censoring", 0),
        BoardOption::new("o_show_dot", 0),
        BoardOption::new("o_topic_views", 1),
        BoardOption::new("o_quickjump", 1),
        BoardOption::new("o_gzip", 0),
        BoardOption::new("o_additional_navlinks", ""),
        BoardOption::new("o_report_method", 0),
        BoardOption::new("o_regs_report", 0),
        BoardOption::new("o_default_email_setting", 1),
        BoardOption::new("o_mailing_list", board.mailing_list()),
        BoardOption::new("o_avatars", avatars),
        BoardOption::new("o_avatars_dir", "img/avatars"),
        BoardOption::new("o_avatars_width", 60),
        BoardOption::new("o_avatars_height", 60),
        BoardOption::new("o_avatars_size", 10240),
        BoardOption::new("o_search_all_forums", 1),
        BoardOption::new("o_admin_email", board.admin_email.as_str()),
        BoardOption::new("o_webmaster_email", board.webmaster_email()),
        BoardOption::new("o_forum_subscriptions", 1),
        BoardOption::new("o_topic_subscriptions", 1),
        BoardOption::null("o_smtp_host"),
        BoardOption::null("o_smtp_user"),
        BoardOption::null("o_smtp_pass"),
        BoardOption::new("o_smtp_ssl", 0),
        BoardOption::new("o_regs_allow", 1),
        BoardOption::new("o_regs_verify", 0),
        BoardOption::new("o_announcement", 0),
        BoardOption::new("o_announcement_message", strings.announcement.as_str()),
        BoardOption::new("o_rules", 0),
        BoardOption::new("o_rules_message", strings.rules.as_str()),
        BoardOption::new("o_maintenance", 0),
        BoardOption::new("o_maintenance_message", strings.maintenance_message.as_str()),
        BoardOption::new("o_default_dst", 0),
        BoardOption::new("o_feed_type", 2),
        BoardOption::new("o_feed_ttl", 0),
        BoardOption::new("p_message_bbcode", 1),
        BoardOption::new("p_message_img_tag", 1),
        BoardOption::new("p_message_all_caps", 1),
        BoardOption::new("p_subject_all_caps", 1),
        BoardOption::new("p_sig_all_caps", 1),
        BoardOption::new("p_sig_bbcode", 1),
        BoardOption::new("p_sig_img_tag", 0),
        BoardOption::new("p_sig_length", 400),
        BoardOption::new("p_sig_lines", 4),
        BoardOption::new("p_allow_banned_email", 1),
        BoardOption::new("p_allow_dupe_email", 0),
        BoardOption::new("p_force_guest_email", 1),
    ]
}

/// Category and forum created so a fresh board is not empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoContent {
    pub category_name: String,
    pub category_position: i64,
    pub forum_name: String,
    pub forum_desc: String,
    pub forum_position: i64,
}

impl Default for DemoContent {
    fn default() -> Self {
        Self {
            category_name: "Test category".to_string(),
            category_position: 0,
            forum_name: "Test forum".to_string(),
            forum_desc: "Your first forum for testing.".to_string(),
            forum_position: 0,
        }
    }
}
