//! SQL for each table created during installation.
//!
//! The seeded tables (`groups`, `config`, `users`, `categories`, `forums`)
//! only have plain lookup indexes on their natural keys.

pub const BANS: &str = r#"
CREATE TABLE IF NOT EXISTS bans (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    ip TEXT,
    email TEXT,
    message TEXT,
    expire INTEGER,
    ban_creator INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_bans_username ON bans(username);
"#;

pub const CATEGORIES: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    cat_name TEXT NOT NULL DEFAULT 'New Category',
    disp_position INTEGER NOT NULL DEFAULT 0
);
"#;

pub const CONFIG: &str = r#"
CREATE TABLE IF NOT EXISTS config (
    conf_name TEXT NOT NULL DEFAULT '',
    conf_value TEXT
);

CREATE INDEX IF NOT EXISTS idx_config_name ON config(conf_name);
"#;

pub const FORUM_PERMS: &str = r#"
CREATE TABLE IF NOT EXISTS forum_perms (
    group_id INTEGER NOT NULL DEFAULT 0,
    forum_id INTEGER NOT NULL DEFAULT 0,
    read_forum INTEGER NOT NULL DEFAULT 1,
    post_replies INTEGER NOT NULL DEFAULT 1,
    post_topics INTEGER NOT NULL DEFAULT 1,
    PRIMARY KEY (group_id, forum_id)
);
"#;

pub const FORUM_SUBSCRIPTIONS: &str = r#"
CREATE TABLE IF NOT EXISTS forum_subscriptions (
    user_id INTEGER NOT NULL DEFAULT 0,
    forum_id INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (user_id, forum_id)
);
"#;

pub const FORUMS: &str = r#"
CREATE TABLE IF NOT EXISTS forums (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    forum_name TEXT NOT NULL DEFAULT 'New forum',
    forum_desc TEXT,
    redirect_url TEXT,
    moderators TEXT,
    num_topics INTEGER NOT NULL DEFAULT 0,
    num_posts INTEGER NOT NULL DEFAULT 0,
    last_post INTEGER,
    last_post_id INTEGER,
    last_poster TEXT,
    sort_by INTEGER NOT NULL DEFAULT 0,
    disp_position INTEGER NOT NULL DEFAULT 0,
    cat_id INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_forums_cat_id ON forums(cat_id);
"#;

// Group ids are assigned by the installer, so `id` is a plain column
pub const GROUPS: &str = r#"
CREATE TABLE IF NOT EXISTS "groups" (
    id INTEGER NOT NULL,
    title TEXT NOT NULL DEFAULT '',
    user_title TEXT,
    promote_min_posts INTEGER NOT NULL DEFAULT 0,
    promote_next_group INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_groups_id ON "groups"(id);
"#;

pub const GROUP_PERMISSIONS: &str = r#"
CREATE TABLE IF NOT EXISTS group_permissions (
    group_id INTEGER NOT NULL,
    name TEXT NOT NULL,
    value INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (group_id, name)
);
"#;

pub const POSTS: &str = r#"
CREATE TABLE IF NOT EXISTS posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    poster TEXT NOT NULL DEFAULT '',
    poster_id INTEGER NOT NULL DEFAULT 1,
    poster_ip TEXT,
    poster_email TEXT,
    message TEXT,
    hide_smilies INTEGER NOT NULL DEFAULT 0,
    posted INTEGER NOT NULL DEFAULT 0,
    edited INTEGER,
    edited_by TEXT,
    topic_id INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_posts_topic_id ON posts(topic_id);
CREATE INDEX IF NOT EXISTS idx_posts_multi ON posts(poster_id, topic_id);
"#;

pub const REPORTS: &str = r#"
CREATE TABLE IF NOT EXISTS reports (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    post_id INTEGER NOT NULL DEFAULT 0,
    topic_id INTEGER NOT NULL DEFAULT 0,
    forum_id INTEGER NOT NULL DEFAULT 0,
    reported_by INTEGER NOT NULL DEFAULT 0,
    created INTEGER NOT NULL DEFAULT 0,
    message TEXT,
    zapped INTEGER,
    zapped_by INTEGER
);

CREATE INDEX IF NOT EXISTS idx_reports_zapped ON reports(zapped);
"#;

pub const SESSIONS: &str = r#"
CREATE TABLE IF NOT EXISTS sessions (
    id TEXT PRIMARY KEY,
    user_id INTEGER,
    payload TEXT NOT NULL,
    last_activity INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_sessions_last_activity ON sessions(last_activity);
"#;

pub const TOPIC_SUBSCRIPTIONS: &str = r#"
CREATE TABLE IF NOT EXISTS topic_subscriptions (
    user_id INTEGER NOT NULL DEFAULT 0,
    topic_id INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (user_id, topic_id)
);
"#;

pub const TOPICS: &str = r#"
CREATE TABLE IF NOT EXISTS topics (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    poster TEXT NOT NULL DEFAULT '',
    subject TEXT NOT NULL DEFAULT '',
    posted INTEGER NOT NULL DEFAULT 0,
    first_post_id INTEGER NOT NULL DEFAULT 0,
    last_post INTEGER NOT NULL DEFAULT 0,
    last_post_id INTEGER NOT NULL DEFAULT 0,
    last_poster TEXT,
    num_views INTEGER NOT NULL DEFAULT 0,
    num_replies INTEGER NOT NULL DEFAULT 0,
    closed INTEGER NOT NULL DEFAULT 0,
    sticky INTEGER NOT NULL DEFAULT 0,
    moved_to INTEGER,
    forum_id INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_topics_forum_id ON topics(forum_id);
CREATE INDEX IF NOT EXISTS idx_topics_moved_to ON topics(moved_to);
CREATE INDEX IF NOT EXISTS idx_topics_last_post ON topics(last_post);
"#;

pub const USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    group_id INTEGER NOT NULL DEFAULT 3,
    username TEXT NOT NULL DEFAULT '',
    password TEXT NOT NULL DEFAULT '',
    email TEXT NOT NULL DEFAULT '',
    title TEXT,
    realname TEXT,
    url TEXT,
    location TEXT,
    signature TEXT,
    disp_topics INTEGER,
    disp_posts INTEGER,
    email_setting INTEGER NOT NULL DEFAULT 1,
    notify_with_post INTEGER NOT NULL DEFAULT 0,
    auto_notify INTEGER NOT NULL DEFAULT 0,
    show_smilies INTEGER NOT NULL DEFAULT 1,
    show_img INTEGER NOT NULL DEFAULT 1,
    show_img_sig INTEGER NOT NULL DEFAULT 1,
    show_avatars INTEGER NOT NULL DEFAULT 1,
    show_sig INTEGER NOT NULL DEFAULT 1,
    timezone REAL NOT NULL DEFAULT 0,
    dst INTEGER NOT NULL DEFAULT 0,
    time_format INTEGER NOT NULL DEFAULT 0,
    date_format INTEGER NOT NULL DEFAULT 0,
    language TEXT NOT NULL DEFAULT 'en',
    style TEXT NOT NULL DEFAULT 'Air',
    num_posts INTEGER NOT NULL DEFAULT 0,
    last_post INTEGER,
    last_search INTEGER,
    last_email_sent INTEGER,
    last_report_sent INTEGER,
    registered INTEGER NOT NULL DEFAULT 0,
    registration_ip TEXT NOT NULL DEFAULT '0.0.0.0',
    last_visit INTEGER NOT NULL DEFAULT 0,
    admin_note TEXT,
    activate_string TEXT,
    activate_key TEXT,
    remember_token TEXT
);

CREATE INDEX IF NOT EXISTS idx_users_username ON users(username);
CREATE INDEX IF NOT EXISTS idx_users_registered ON users(registered);
"#;
