//! Role and reputation to privilege resolution

use dealgate::*;

const TRUSTED: [Role; 5] = [Role::Verified, Role::Business, Role::Moderator, Role::Admin, Role::Superadmin];
const REPUTATIONS: [f64; 9] = [f64::NEG_INFINITY, -1e9, -1.0, 0.0, 0.5, 0.999_999, 1.0, 1.5, 1e12];

// ============================================================================
// Guests
// ============================================================================

#[test] fn guest_gets_nothing_at_any_reputation() {
    for rep in REPUTATIONS.iter().copied().chain([f64::INFINITY, f64::NAN]) {
        assert_eq!(privileges_for(Role::Guest, rep), PrivilegeSet::NONE);
    }
}

#[test] fn unknown_role_string_fails_closed() {
    for raw in ["", "root", "Admin", "SUPERADMIN", "owner"] {
        assert_eq!(privileges_for_raw(raw, 100.0), PrivilegeSet::NONE, "{:?}", raw);
    }
}

// ============================================================================
// Plain users
// ============================================================================

#[test] fn user_post_flips_exactly_at_threshold() {
    assert!(!privileges_for(Role::User, 0.999_999).can_post);
    assert!(privileges_for(Role::User, 1.0).can_post);
    assert!(privileges_for(Role::User, 1.000_001).can_post);
    assert_eq!(POST_REPUTATION_THRESHOLD, 1.0);
}

#[test] fn low_reputation_user_still_participates() {
    let p = privileges_for(Role::User, 0.0);
    assert_eq!(p, PrivilegeSet { can_post: false, can_vote: true, can_comment: true, can_report: true, instant_publish: false });
}

#[test] fn user_never_instant_publishes() {
    for rep in REPUTATIONS {
        assert!(!privileges_for(Role::User, rep).instant_publish);
    }
}

#[test] fn nan_reputation_cannot_post() {
    assert!(!privileges_for(Role::User, f64::NAN).can_post);
}

// ============================================================================
// Trusted roles
// ============================================================================

#[test] fn trusted_roles_get_everything_regardless_of_reputation() {
    for role in TRUSTED {
        for rep in REPUTATIONS {
            let p = privileges_for(role, rep);
            assert!(p.can_post && p.instant_publish, "{} at {}", role, rep);
            assert_eq!(p.to_mask(), ALL_PRIVILEGES);
        }
    }
}

#[test] fn non_guests_always_vote_comment_report() {
    for role in Role::ALL.into_iter().filter(|r| *r != Role::Guest) {
        for rep in REPUTATIONS {
            let p = privileges_for(role, rep);
            assert!(p.can_vote && p.can_comment && p.can_report);
        }
    }
}

#[test] fn reputation_only_matters_for_user() {
    for role in Role::ALL.into_iter().filter(|r| *r != Role::User) {
        let base = privileges_for(role, 0.0);
        for rep in REPUTATIONS {
            assert_eq!(privileges_for(role, rep), base, "{} at {}", role, rep);
        }
    }
}

#[test] fn raw_aliases_resolve_like_canonical() {
    assert_eq!(privileges_for_raw("super_admin", 0.0), privileges_for(Role::Superadmin, 0.0));
    assert_eq!(privileges_for_raw(" user ", 2.0), privileges_for(Role::User, 2.0));
}

// ============================================================================
// Bitmask
// ============================================================================

#[test] fn mask_names_and_allows() {
    let p = privileges_for(Role::User, 0.0);
    assert_eq!(p.to_mask(), VOTE | COMMENT | REPORT);
    assert_eq!(p.names(), vec!["vote", "comment", "report"]);
    assert!(p.allows(VOTE | REPORT));
    assert!(!p.allows(VOTE | POST));
    assert!(p.allows(0));
    assert_eq!(PrivilegeSet::from_mask(p.to_mask()), p);
}

#[test] fn from_mask_ignores_unknown_bits() {
    assert_eq!(PrivilegeSet::from_mask(0xE0), PrivilegeSet::NONE);
    assert_eq!(PrivilegeSet::from_mask(0xFF).to_mask(), ALL_PRIVILEGES);
}

#[test] fn names_to_mask_skips_unknown() {
    assert_eq!(names_to_mask(&["post", "instant_publish", "delete"]), POST | INSTANT_PUBLISH);
    assert_eq!(names_to_mask(&[]), 0);
    assert_eq!(mask_to_names(ALL_PRIVILEGES).len(), 5);
}

#[test] fn serializes_camel_case() {
    let v = serde_json::to_value(privileges_for(Role::Verified, 0.0)).unwrap();
    assert_eq!(v, serde_json::json!({
        "canPost": true, "canVote": true, "canComment": true, "canReport": true, "instantPublish": true
    }));
}
