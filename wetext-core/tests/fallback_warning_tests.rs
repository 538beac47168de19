//! 语言回退警告测试
//!
//! 用一个只统计 WARN 事件的 tracing layer 验证：英文 ITN 回退到中文时，
//! 每次调用恰好产生一条警告

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

use wetext_core::grammar::{TaggerKind, VerbalizerKind};
use wetext_core::{
    ConfigOverrides, FnGrammar, GrammarRegistry, Language, LanguageSelector, Normalizer, NormalizerConfig,
    Operator, PipelineWarning, WeTextError,
};

/// 统计 WARN 级别事件
#[derive(Clone, Default)]
struct WarnCounter {
    count: Arc<AtomicUsize>,
}

impl WarnCounter {
    fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn itn_normalizer() -> Normalizer {
    let registry = GrammarRegistry::builder()
        .tagger(
            TaggerKind::ZhItn,
            FnGrammar::new(|text| Ok(format!("cardinal {{ value: \"{}\" }}", text))),
        )
        .verbalizer(VerbalizerKind::ZhItn, FnGrammar::new(|text| Ok(text.to_string())))
        .build();

    Normalizer::new(
        Arc::new(registry),
        NormalizerConfig {
            operator: Operator::Itn,
            ..NormalizerConfig::default()
        },
    )
}

#[test]
fn test_fallback_warns_exactly_once_per_call() {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let normalizer = itn_normalizer();

    tracing::subscriber::with_default(subscriber, || {
        let outcome = normalizer.process("twenty one", normalizer.config()).unwrap();
        assert_eq!(outcome.language, Some(Language::Zh));
        assert_eq!(outcome.text, r#"cardinal { value: "twenty one" }"#);
        assert_eq!(counter.get(), 1);

        normalizer.normalize("twenty one").unwrap();
        assert_eq!(counter.get(), 2);
    });
}

#[test]
fn test_no_warning_without_fallback() {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let normalizer = itn_normalizer();

    tracing::subscriber::with_default(subscriber, || {
        let outcome = normalizer.process("二十一", normalizer.config()).unwrap();
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.language, Some(Language::Zh));

        // 空输入不进入管道，也就不存在回退
        normalizer.normalize("").unwrap();
    });

    assert_eq!(counter.get(), 0);
}

#[test]
fn test_fallback_recorded_in_outcome() {
    let normalizer = itn_normalizer();
    let config = normalizer
        .config()
        .overlay(&ConfigOverrides::new().lang(LanguageSelector::En));

    let outcome = normalizer.process("一千", &config).unwrap();

    assert_eq!(
        outcome.warnings,
        vec![PipelineWarning::LanguageFallback {
            requested: Language::En,
            used: Language::Zh,
            operator: Operator::Itn,
        }]
    );
    assert_eq!(
        outcome.warnings[0].to_string(),
        "no itn grammar for 'en', falling back to 'zh'"
    );
}

#[test]
fn test_fallback_disabled_is_an_error_without_warning() {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let normalizer = itn_normalizer();
    let overrides = ConfigOverrides::new().allow_language_fallback(false);

    tracing::subscriber::with_default(subscriber, || {
        let err = normalizer.normalize_with("twenty one", &overrides).unwrap_err();
        assert!(matches!(
            err,
            WeTextError::UnsupportedCombination {
                language: Language::En,
                operator: Operator::Itn,
            }
        ));
        assert_eq!(
            err.to_string(),
            "Unsupported combination: language=en, operator=itn"
        );
    });

    assert_eq!(counter.get(), 0);
}
