use proptest::prelude::*;
use uuid::Uuid;
use xrkit_kernel::prelude::*;

trait Capability {}

struct HandJointService;
impl Registered for HandJointService {
    const NAME: &'static str = "HandJointService";
}

struct BaseService;
impl Registered for BaseService {
    const NAME: &'static str = "BaseService";
    const ABSTRACT: bool = true;
}

struct Unrelated;
impl Registered for Unrelated {
    const NAME: &'static str = "Unrelated";
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    let hand_joints = TypeInfo::builder::<HandJointService>().implements::<dyn Capability>();
    registry.register(hand_joints.build().unwrap()).unwrap();
    let base = TypeInfo::builder::<BaseService>().implements::<dyn Capability>();
    registry.register(base.build().unwrap()).unwrap();
    registry.register_type::<Unrelated>().unwrap();
    registry
}

proptest! {
    #[test]
    fn token_round_trip_resolves_the_same_type(bits in any::<u128>()) {
        let guid = TypeGuid::from_uuid(Uuid::from_u128(bits));
        let mut registry = TypeRegistry::new();
        let handle = registry
            .register(TypeInfo::builder::<HandJointService>().guid(guid).build().unwrap())
            .unwrap();

        let stored = serde_json::to_string(&TypeReference::from_type(handle)).unwrap();
        let mut restored: TypeReference = serde_json::from_str(&stored).unwrap();

        prop_assert_eq!(restored.to_guid(), Some(guid));
        prop_assert!(restored.bind(&registry).is_some_and(|ty| ty.is::<HandJointService>()));
    }
}

#[test]
fn name_derived_identity_is_stable() {
    let first = TypeInfo::of::<HandJointService>().unwrap().guid();
    let second = TypeInfo::of::<HandJointService>().unwrap().guid();
    assert_eq!(first, second);
    assert_eq!(first, TypeGuid::from_name("HandJointService"));
}

#[test]
fn unresolved_token_stays_unresolved() {
    let registry = registry();
    let token = "5d0f8d2e-9a41-4c7b-8e33-1f2a3b4c5d6e";
    let mut reference = TypeReference::from_token(token);

    for _ in 0..3 {
        assert!(reference.bind(&registry).is_none());
        assert!(!reference.is_bound());
        assert_eq!(reference.token(), token);
    }
    assert!(registry.resolve_token(token).is_none());
}

#[test]
fn late_registration_binds_on_retry() {
    let mut registry = TypeRegistry::new();
    let token = TypeGuid::from_name("HandJointService").to_string();
    let mut reference = TypeReference::from_token(&token);
    assert!(reference.bind(&registry).is_none());

    registry.register_type::<HandJointService>().unwrap();
    assert!(reference.bind(&registry).is_some());
}

#[test]
fn constraint_rejects_abstract_implementors() {
    let registry = registry();
    let constraint = TypeConstraint::implementing::<dyn Capability>();

    let concrete = registry.handle_of::<HandJointService>().unwrap();
    let base = registry.handle_of::<BaseService>().unwrap();
    let unrelated = registry.handle_of::<Unrelated>().unwrap();

    assert!(constraint.is_satisfied_by(&concrete));
    assert!(!constraint.is_satisfied_by(&base));
    assert!(!constraint.is_satisfied_by(&unrelated));
    assert!(constraint.allow_abstract(true).is_satisfied_by(&base));

    let names: Vec<_> =
        registry.implementors(&constraint).iter().map(|ty| ty.name().to_owned()).collect();
    assert_eq!(names, ["HandJointService"]);
}

#[test]
fn strict_assignment_checks_interface() {
    let registry = registry();
    let constraint = TypeConstraint::implementing::<dyn Capability>();
    let mut reference = TypeReference::default();

    let err = reference
        .set_type_strict(registry.handle_of::<Unrelated>().unwrap(), &constraint)
        .unwrap_err();
    assert!(matches!(err, KernelError::TypeConstraintViolation { .. }));
    assert!(reference.is_empty());

    let hand_joints = registry.handle_of::<HandJointService>().unwrap();
    reference.set_type_strict(hand_joints, &constraint).unwrap();
    assert_eq!(reference.satisfies(&constraint), Some(true));
}

#[test]
fn conflicting_identities_are_rejected() {
    struct Impostor;
    impl Registered for Impostor {
        const NAME: &'static str = "HandJointService";
    }

    let mut registry = registry();
    let err = registry.register_type::<Impostor>().unwrap_err();
    assert!(matches!(err, KernelError::DuplicateType { .. }));

    let again = registry.register_type::<HandJointService>().unwrap();
    assert!(again.is::<HandJointService>());
    assert_eq!(registry.len(), 3);
}
