use super::*;

struct NoopBot {
    kind: BotKind,
}

#[async_trait]
impl Bot for NoopBot {
    fn kind(&self) -> BotKind {
        self.kind
    }

    fn describe(&self) -> &str {
        "does nothing"
    }

    async fn run(&self) -> Result<PaintSummary, BotError> {
        Ok(PaintSummary::default())
    }
}

#[test]
fn test_bot_kind_from_str() {
    assert_eq!("farm".parse::<BotKind>().unwrap(), BotKind::Farm);
    assert_eq!("image".parse::<BotKind>().unwrap(), BotKind::Image);
    assert_eq!("guard".parse::<BotKind>().unwrap(), BotKind::Guard);
}

#[test]
fn test_bot_kind_from_str_normalizes() {
    assert_eq!(" Image ".parse::<BotKind>().unwrap(), BotKind::Image);
    assert_eq!("GUARD".parse::<BotKind>().unwrap(), BotKind::Guard);
}

#[test]
fn test_bot_kind_from_str_unknown() {
    let err = "sniper".parse::<BotKind>().unwrap_err();
    assert!(matches!(err, BotError::UnknownKind(ref tag) if tag == "sniper"));
}

#[test]
fn test_bot_kind_display_round_trip() {
    for kind in [BotKind::Farm, BotKind::Image, BotKind::Guard] {
        assert_eq!(kind.to_string().parse::<BotKind>().unwrap(), kind);
    }
}

#[test]
fn test_registry_register_and_get() {
    let mut registry = BotRegistry::new();
    registry
        .register(Arc::new(NoopBot { kind: BotKind::Image }))
        .unwrap();
    assert!(registry.get(BotKind::Image).is_some());
    assert!(registry.get(BotKind::Farm).is_none());
}

#[test]
fn test_registry_rejects_double_registration() {
    let mut registry = BotRegistry::new();
    registry
        .register(Arc::new(NoopBot { kind: BotKind::Farm }))
        .unwrap();
    let err = registry
        .register(Arc::new(NoopBot { kind: BotKind::Farm }))
        .unwrap_err();
    assert!(matches!(err, BotError::AlreadyRegistered(BotKind::Farm)));
}

#[test]
fn test_registry_resolve_by_tag() {
    let mut registry = BotRegistry::new();
    registry
        .register(Arc::new(NoopBot { kind: BotKind::Guard }))
        .unwrap();
    let bot = registry.resolve("guard").unwrap();
    assert_eq!(bot.kind(), BotKind::Guard);
}

#[test]
fn test_registry_resolve_unknown_tag() {
    let registry = BotRegistry::new();
    assert!(matches!(
        registry.resolve("nonsense"),
        Err(BotError::UnknownKind(_))
    ));
}

#[test]
fn test_registry_resolve_unregistered_kind() {
    let registry = BotRegistry::new();
    assert!(matches!(
        registry.resolve("image"),
        Err(BotError::NotRegistered(BotKind::Image))
    ));
}

#[test]
fn test_registry_kinds() {
    let mut registry = BotRegistry::new();
    registry
        .register(Arc::new(NoopBot { kind: BotKind::Farm }))
        .unwrap();
    registry
        .register(Arc::new(NoopBot { kind: BotKind::Image }))
        .unwrap();
    let mut kinds = registry.kinds();
    kinds.sort_by_key(|k| k.to_string());
    assert_eq!(kinds, vec![BotKind::Farm, BotKind::Image]);
}

#[tokio::test]
async fn test_bot_run_through_registry() {
    let mut registry = BotRegistry::new();
    registry
        .register(Arc::new(NoopBot { kind: BotKind::Image }))
        .unwrap();
    let bot = registry.resolve("image").unwrap();
    let summary = bot.run().await.unwrap();
    assert_eq!(summary, PaintSummary::default());
}
