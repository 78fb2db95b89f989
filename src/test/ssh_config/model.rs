use super::{HostEntry, UNNAMED_HOST};

fn web_entry() -> HostEntry {
    HostEntry {
        patterns: vec!["Web".to_string(), "web-alt".to_string()],
        host_name: Some("10.0.0.5".to_string()),
        user: Some("Deploy".to_string()),
        port: Some("2222".to_string()),
        proxy_jump: Some("bastion".to_string()),
        ..HostEntry::default()
    }
}

#[test]
fn search_text_is_lowercased_and_space_joined() {
    let entry = web_entry();
    assert_eq!(entry.search_text(), "web web-alt 10.0.0.5 deploy 2222  bastion");
}

#[test]
fn search_text_includes_typed_fields_when_present() {
    let mut entry = HostEntry::new(vec!["db".to_string()]);
    entry.server_alive_interval = Some(30);
    entry.forward_agent = Some(false);
    assert_eq!(entry.search_text(), "db      30 no");

    entry.identities_only = Some(true);
    assert_eq!(entry.search_text(), "db      30 no yes");
}

#[test]
fn search_text_reflects_field_changes() {
    let mut entry = HostEntry::new(vec!["db".to_string()]);
    assert!(!entry.search_text().contains("postgres"));
    entry.host_name = Some("Postgres.internal".to_string());
    assert!(entry.search_text().contains("postgres.internal"));
}

#[test]
fn display_text_combines_alias_target_port_and_jump() {
    let (primary, secondary) = web_entry().display_text();
    assert_eq!(primary, "Web  Deploy@10.0.0.5 :2222 via bastion");
    assert_eq!(secondary, "web-alt");

    let mut host_only = HostEntry::new(vec!["db".to_string()]);
    host_only.host_name = Some("db.internal".to_string());
    assert_eq!(host_only.display_text().0, "db  db.internal");

    let mut user_only = HostEntry::new(vec!["db".to_string()]);
    user_only.user = Some("admin".to_string());
    assert_eq!(user_only.display_text().0, "db  admin");
}

#[test]
fn entry_without_patterns_is_unnamed() {
    let entry = HostEntry::new(Vec::new());
    assert_eq!(entry.primary_alias(), None);
    let (primary, secondary) = entry.display_text();
    assert_eq!(primary, UNNAMED_HOST);
    assert!(secondary.is_empty());
}

#[test]
fn details_follow_config_directive_order() {
    let mut entry = web_entry();
    entry.identities_only = Some(true);
    entry.server_alive_count_max = Some(3);
    let labels: Vec<&str> = entry.details().iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["HostName", "User", "Port", "ProxyJump", "IdentitiesOnly", "ServerAliveCountMax"]);
    assert_eq!(entry.details()[4].1, "yes");
}
