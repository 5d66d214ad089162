use crate::catalog::{
    CALL_TO_ACTION_ROLE, DEFAULT_MIDDLE_ROLES, HERO_SHOT_ROLE, RoleFraming, framing, story_arc,
};

/// Sets this small have no room for a meaningful second device.
pub const SMALL_SET_MAX: usize = 3;

/// Role and framing for the screenshot at 1-based `index` out of `total`.
///
/// A known story arc is walked cyclically, so sets longer than the arc wrap
/// around to its first entry. Without an arc the first image is the hero
/// shot, the last one the call to action, and the ones in between rotate
/// through [`DEFAULT_MIDDLE_ROLES`]. Unknown arc names behave like no arc.
pub fn get_role_and_framing(index: usize, total: usize, arc_name: Option<&str>) -> RoleFraming {
    if let Some(arc) = arc_name.and_then(story_arc) {
        let selected = arc[(index.saturating_sub(1)) % arc.len()];
        if total <= SMALL_SET_MAX && selected.framing == framing::DUAL_HERO {
            return RoleFraming::new(selected.role, framing::HERO);
        }
        return selected;
    }

    if index <= 1 {
        let hero_framing = if total <= SMALL_SET_MAX {
            framing::HERO
        } else {
            framing::DUAL_HERO
        };
        return RoleFraming::new(HERO_SHOT_ROLE, hero_framing);
    }

    if index == total {
        return RoleFraming::new(CALL_TO_ACTION_ROLE, framing::CTA);
    }

    DEFAULT_MIDDLE_ROLES[(index - 2) % DEFAULT_MIDDLE_ROLES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STORY_ARCS;
    use proptest::prelude::*;

    #[test]
    fn small_default_set_is_hero_then_cta() {
        let first = get_role_and_framing(1, 2, None);
        let last = get_role_and_framing(2, 2, None);
        assert_eq!(first, RoleFraming::new(HERO_SHOT_ROLE, framing::HERO));
        assert_eq!(last, RoleFraming::new(CALL_TO_ACTION_ROLE, framing::CTA));
    }

    #[test]
    fn larger_default_set_opens_with_two_devices() {
        assert_eq!(get_role_and_framing(1, 4, None).framing, framing::DUAL_HERO);
        assert_eq!(get_role_and_framing(2, 4, None).role, "FEATURE HIGHLIGHT");
        assert_eq!(get_role_and_framing(3, 4, None).role, "DATA & INSIGHTS");
        assert_eq!(get_role_and_framing(4, 4, None).role, CALL_TO_ACTION_ROLE);
    }

    #[test]
    fn middle_roles_cycle_past_the_default_list() {
        // Index 7 of 10 is the sixth interior slot and wraps to the first middle role.
        assert_eq!(get_role_and_framing(7, 10, None).role, "FEATURE HIGHLIGHT");
        assert_eq!(get_role_and_framing(6, 10, None).role, "PERSONALIZATION");
    }

    #[test]
    fn single_image_is_the_hero() {
        assert_eq!(
            get_role_and_framing(1, 1, None),
            RoleFraming::new(HERO_SHOT_ROLE, framing::HERO)
        );
    }

    #[test]
    fn arc_swaps_dual_hero_for_small_sets() {
        let small = get_role_and_framing(1, 3, Some("feature_dive"));
        assert_eq!(small, RoleFraming::new(HERO_SHOT_ROLE, framing::HERO));

        let large = get_role_and_framing(1, 5, Some("feature_dive"));
        assert_eq!(large.framing, framing::DUAL_HERO);
    }

    #[test]
    fn arc_ignores_position_of_last_image() {
        let last = get_role_and_framing(3, 3, Some("game_hype"));
        assert_eq!(last.role, "PROGRESSION & LOOT");
    }

    #[test]
    fn unknown_arc_uses_default_roles() {
        assert_eq!(
            get_role_and_framing(2, 2, Some("heist")),
            get_role_and_framing(2, 2, None)
        );
    }

    proptest! {
        #[test]
        fn assignment_is_deterministic(total in 1usize..40, seed in 0usize..40, arc in prop::option::of(0..STORY_ARCS.len())) {
            let index = seed % total + 1;
            let arc_name = arc.map(|i| STORY_ARCS[i].0);
            prop_assert_eq!(
                get_role_and_framing(index, total, arc_name),
                get_role_and_framing(index, total, arc_name)
            );
        }

        #[test]
        fn small_default_sets_never_open_with_two_devices(total in 1usize..=SMALL_SET_MAX) {
            prop_assert_ne!(get_role_and_framing(1, total, None).framing, framing::DUAL_HERO);
        }

        #[test]
        fn arcs_repeat_every_arc_length(arc in 0..STORY_ARCS.len(), k in 1usize..20, extra in 0usize..10) {
            let (name, entries) = STORY_ARCS[arc];
            let total = k + entries.len() + extra;
            prop_assert_eq!(
                get_role_and_framing(k, total, Some(name)),
                get_role_and_framing(k + entries.len(), total, Some(name))
            );
        }
    }
}
