use super::LinePrompt;
use crate::ssh_config::AliasPrompt;
use std::io::Cursor;

#[test]
fn enter_accepts_the_default_alias() {
    let mut output = Vec::new();
    let mut prompt = LinePrompt::new(Cursor::new("\n"), &mut output);
    assert_eq!(prompt.confirm_alias("root@web"), Some("root@web".to_string()));
    assert_eq!(String::from_utf8(output).expect("utf-8"), "Alias [root@web]: ");
}

#[test]
fn typed_alias_replaces_the_default() {
    let mut prompt = LinePrompt::new(Cursor::new("  web-prod \n"), Vec::new());
    assert_eq!(prompt.confirm_alias("root@web"), Some("web-prod".to_string()));
}

#[test]
fn end_of_input_declines() {
    let mut prompt = LinePrompt::new(Cursor::new(""), Vec::new());
    assert_eq!(prompt.confirm_alias("root@web"), None);
}
