//! Property tests over identities and chains of arbitrary depth

use ex::{conv, expose, is, root_cause_shared, share, ChainedError, DynError, Identity};
use proptest::prelude::*;
use std::sync::Arc;

/// Build `ids[0].because(ids[1].because(... ids[n-1]))`
fn chain_of(ids: &[Identity]) -> Option<ChainedError> {
    let (last, rest) = ids.split_last()?;
    let mut err = ChainedError::from(last.clone());
    for id in rest.iter().rev() {
        err = id.because(err);
    }
    Some(err)
}

proptest! {
    #[test]
    fn identity_renders_text(text in ".*") {
        prop_assert_eq!(Identity::from(text.clone()).to_string(), text);
    }

    #[test]
    fn expose_returns_because_parts(id in "[a-z ]{1,16}", cause in "[a-z ]{1,16}") {
        let id = Identity::from(id);
        let cause: DynError = Arc::new(Identity::from(cause));
        let err = share(id.because(Arc::clone(&cause)));

        let (primary, exposed) = expose(&err);
        prop_assert_eq!(primary.downcast_ref::<Identity>(), Some(&id));
        prop_assert!(exposed.is_some_and(|exposed| Arc::ptr_eq(&exposed, &cause)));
    }

    #[test]
    fn root_cause_is_idempotent(texts in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let ids: Vec<Identity> = texts.into_iter().map(Identity::from).collect();
        let err = share(chain_of(&ids).unwrap_or_else(|| ChainedError::new("empty")));

        let once = root_cause_shared(&err);
        let twice = root_cause_shared(&once);
        prop_assert!(Arc::ptr_eq(&once, &twice));
    }

    #[test]
    fn matching_is_invariant_to_depth(
        texts in prop::collection::hash_set("[a-z]{1,8}", 1..12),
        stranger in "[A-Z]{1,8}",
    ) {
        let ids: Vec<Identity> = texts.into_iter().map(Identity::from).collect();
        let Some(err) = chain_of(&ids) else {
            return Ok(());
        };

        for id in &ids {
            prop_assert!(is(&err, id));
        }
        prop_assert!(!is(&err, &Identity::from(stranger)));
        let root = err.root_cause();
        prop_assert_eq!(root.downcast_ref::<Identity>(), ids.last());
    }

    #[test]
    fn rendering_is_deterministic_and_ordered(texts in prop::collection::vec("[a-z]{1,8}", 1..12)) {
        let ids: Vec<Identity> = texts.iter().cloned().map(Identity::from).collect();
        let Some(err) = chain_of(&ids) else {
            return Ok(());
        };

        prop_assert_eq!(err.to_string(), err.to_string());
        prop_assert_eq!(err.to_string(), texts.join(ex::SEPARATOR));
    }

    #[test]
    fn conv_is_idempotent(texts in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let ids: Vec<Identity> = texts.into_iter().map(Identity::from).collect();
        let Some(original) = chain_of(&ids) else {
            return Ok(());
        };

        let once = conv(original.clone());
        let twice = conv(once.clone());

        prop_assert!(Arc::ptr_eq(once.primary(), twice.primary()));
        prop_assert_eq!(
            once.cause().map(Arc::as_ptr),
            twice.cause().map(Arc::as_ptr)
        );
        prop_assert_eq!(twice.to_string(), original.to_string());
    }
}
