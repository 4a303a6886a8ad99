//! Integration tests for feeding the branch store from a git repository

mod common;

use branchpick::git::{self, BranchSource};
use branchpick::picker::{BranchPicker, PickerView};
use branchpick::store::branch_store;
use common::TestRepo;
use pretty_assertions::assert_eq;

#[test]
fn test_repository_branches_reach_the_picker() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestRepo::new()?;
    fixture.create_branch("feature/login")?;
    fixture.create_branch("feature/logout")?;

    let source = BranchSource::discover(&fixture.path)?;
    let (mut writer, store) = branch_store();
    git::refresh(&source, &mut writer)?;

    let mut picker = BranchPicker::open(store, None);
    for c in "LOG".chars() {
        picker.push_char(c);
    }
    let groups = picker.view().groups().cloned().ok_or("expected groups")?;
    assert!(groups.yours.is_empty());
    assert_eq!(groups.others, vec!["feature/login", "feature/logout"]);
    Ok(())
}

#[test]
fn test_checkout_moves_current_group() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestRepo::new()?;
    fixture.create_branch("dev")?;

    let source = BranchSource::discover(&fixture.path)?;
    let (mut writer, store) = branch_store();
    git::refresh(&source, &mut writer)?;
    let picker = BranchPicker::open(store.clone(), None);

    let yours = picker.view().groups().map(|g| g.yours.clone());
    assert_eq!(yours, Some(vec!["master".to_string()]));

    fixture.switch_to("dev")?;
    assert!(git::refresh(&source, &mut writer)?);

    let yours = picker.view().groups().map(|g| g.yours.clone());
    assert_eq!(yours, Some(vec!["dev".to_string()]));
    assert_eq!(store.revision(), 2);
    Ok(())
}

#[test]
fn test_discover_from_subdirectory() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestRepo::new()?;
    let nested = fixture.path.join("nested/dir");
    std::fs::create_dir_all(&nested)?;

    let source = BranchSource::discover(&nested)?;
    assert_eq!(source.read()?.current_branch.as_deref(), Some("master"));
    assert_eq!(source.path(), nested.as_path());
    Ok(())
}

#[test]
fn test_unchanged_repository_does_not_notify() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestRepo::new()?;
    let source = BranchSource::discover(&fixture.path)?;
    let (mut writer, store) = branch_store();

    assert!(git::refresh(&source, &mut writer)?);
    assert!(!git::refresh(&source, &mut writer)?);
    assert_eq!(store.revision(), 1);
    assert_ne!(
        BranchPicker::open(store, None).view(),
        PickerView::NoBranches
    );
    Ok(())
}
