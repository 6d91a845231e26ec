// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for admin and crew member persistence operations.

use super::sample_crew_profile;
use crate::{DeletePolicy, Persistence, PersistenceError};
use crewops_domain::CrewStatus;

#[test]
fn test_create_admin_and_get_by_id() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let admin_id = persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "s3cure-pw")
        .unwrap();

    let admin = persistence.get_admin_by_id(admin_id).unwrap().unwrap();
    assert_eq!(admin.admin_id, admin_id);
    assert_eq!(admin.name, "Alice Ops");
    assert_eq!(admin.email, "alice@crewops.test");
    assert_eq!(admin.phone, "555-0101");
}

#[test]
fn test_admin_password_is_hashed_and_verifiable() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "s3cure-pw")
        .unwrap();

    let data = persistence
        .get_admin_by_email("alice@crewops.test")
        .unwrap()
        .unwrap();

    // The stored digest must never be the plain text password
    assert_ne!(data.password_hash, "s3cure-pw");
    assert!(
        persistence
            .verify_password("s3cure-pw", &data.password_hash)
            .unwrap()
    );
    assert!(
        !persistence
            .verify_password("wrong-pw", &data.password_hash)
            .unwrap()
    );
}

#[test]
fn test_same_password_yields_different_hashes() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "shared-pw")
        .unwrap();
    persistence
        .create_admin("Bob Ops", "bob@crewops.test", "555-0102", "shared-pw")
        .unwrap();

    let alice = persistence
        .get_admin_by_email("alice@crewops.test")
        .unwrap()
        .unwrap();
    let bob = persistence
        .get_admin_by_email("bob@crewops.test")
        .unwrap()
        .unwrap();

    // Salted hashing: identical passwords must not produce identical digests
    assert_ne!(alice.password_hash, bob.password_hash);
}

#[test]
fn test_duplicate_admin_email_is_rejected() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "pw-one")
        .unwrap();

    let result = persistence.create_admin("Imposter", "alice@crewops.test", "555-0199", "pw-two");
    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_get_admin_by_email_returns_none_for_unknown() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.get_admin_by_email("nobody@crewops.test").unwrap();
    assert!(result.is_none());
}

#[test]
fn test_update_admin_profile() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let admin_id = persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "s3cure-pw")
        .unwrap();

    persistence
        .update_admin(admin_id, "Alice Operations", "alice.ops@crewops.test", "555-0110")
        .unwrap();

    let admin = persistence.get_admin_by_id(admin_id).unwrap().unwrap();
    assert_eq!(admin.name, "Alice Operations");
    assert_eq!(admin.email, "alice.ops@crewops.test");
    assert_eq!(admin.phone, "555-0110");
}

#[test]
fn test_update_missing_admin_fails() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let result = persistence.update_admin(9999, "Ghost", "ghost@crewops.test", "555-0000");
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_delete_admin() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let admin_id = persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "s3cure-pw")
        .unwrap();

    persistence.delete_admin(admin_id).unwrap();
    assert!(persistence.get_admin_by_id(admin_id).unwrap().is_none());

    let result = persistence.delete_admin(admin_id);
    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
}

#[test]
fn test_list_admins_ordered_by_name() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .create_admin("Zoe Ops", "zoe@crewops.test", "555-0103", "pw")
        .unwrap();
    persistence
        .create_admin("Alice Ops", "alice@crewops.test", "555-0101", "pw")
        .unwrap();

    let admins = persistence.list_admins().unwrap();
    assert_eq!(admins.len(), 2);
    assert_eq!(admins[0].name, "Alice Ops");
    assert_eq!(admins[1].name, "Zoe Ops");
}

#[test]
fn test_create_crew_member_defaults_to_active() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let profile = sample_crew_profile("jordan@crewops.test");
    let crew_id = persistence
        .create_crew_member(&profile, "crew-pw", None)
        .unwrap();

    let member = persistence.get_crew_member_by_id(crew_id).unwrap().unwrap();
    assert_eq!(member.status, CrewStatus::Active);
    assert_eq!(member.first_name, "Jordan");
    assert_eq!(member.email, "jordan@crewops.test");
}

#[test]
fn test_create_crew_member_with_explicit_status() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let profile = sample_crew_profile("jordan@crewops.test");
    let crew_id = persistence
        .create_crew_member(&profile, "crew-pw", Some(CrewStatus::OnLeave))
        .unwrap();

    let member = persistence.get_crew_member_by_id(crew_id).unwrap().unwrap();
    assert_eq!(member.status, CrewStatus::OnLeave);
}

#[test]
fn test_update_crew_member_status() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let profile = sample_crew_profile("jordan@crewops.test");
    let crew_id = persistence
        .create_crew_member(&profile, "crew-pw", None)
        .unwrap();

    persistence
        .update_crew_member_status(crew_id, CrewStatus::Suspended)
        .unwrap();

    let member = persistence.get_crew_member_by_id(crew_id).unwrap().unwrap();
    assert_eq!(member.status, CrewStatus::Suspended);
}

#[test]
fn test_update_crew_member_profile_preserves_status() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let crew_id = persistence
        .create_crew_member(
            &sample_crew_profile("jordan@crewops.test"),
            "crew-pw",
            Some(CrewStatus::Inactive),
        )
        .unwrap();

    let mut updated = sample_crew_profile("jordan.reyes@crewops.test");
    updated.crew_role = String::from("Captain");
    persistence.update_crew_member(crew_id, &updated).unwrap();

    let member = persistence.get_crew_member_by_id(crew_id).unwrap().unwrap();
    assert_eq!(member.crew_role, "Captain");
    assert_eq!(member.email, "jordan.reyes@crewops.test");
    // Profile updates never touch status
    assert_eq!(member.status, CrewStatus::Inactive);
}

#[test]
fn test_update_crew_password_rotates_hash() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let crew_id = persistence
        .create_crew_member(&sample_crew_profile("jordan@crewops.test"), "old-pw", None)
        .unwrap();

    let before = persistence
        .get_crew_member_by_email("jordan@crewops.test")
        .unwrap()
        .unwrap();

    persistence.update_crew_password(crew_id, "new-pw").unwrap();

    let after = persistence
        .get_crew_member_by_email("jordan@crewops.test")
        .unwrap()
        .unwrap();

    assert_ne!(before.password_hash, after.password_hash);
    assert!(
        persistence
            .verify_password("new-pw", &after.password_hash)
            .unwrap()
    );
    assert!(
        !persistence
            .verify_password("old-pw", &after.password_hash)
            .unwrap()
    );
}

#[test]
fn test_list_crew_members_ordered_by_last_name() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let mut first = sample_crew_profile("amara@crewops.test");
    first.first_name = String::from("Amara");
    first.last_name = String::from("Zhou");
    persistence.create_crew_member(&first, "pw", None).unwrap();

    let mut second = sample_crew_profile("ben@crewops.test");
    second.first_name = String::from("Ben");
    second.last_name = String::from("Adler");
    persistence.create_crew_member(&second, "pw", None).unwrap();

    let members = persistence.list_crew_members().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].last_name, "Adler");
    assert_eq!(members[1].last_name, "Zhou");
}

#[test]
fn test_delete_crew_member_succeeds_when_not_referenced() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let crew_id = persistence
        .create_crew_member(&sample_crew_profile("jordan@crewops.test"), "pw", None)
        .unwrap();

    persistence
        .delete_crew_member(crew_id, DeletePolicy::Restrict)
        .unwrap();
    assert!(persistence.get_crew_member_by_id(crew_id).unwrap().is_none());
}
