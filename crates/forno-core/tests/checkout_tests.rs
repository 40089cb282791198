use std::sync::Mutex;

use async_trait::async_trait;
use forno_core::services::{
    ChatError, CommentGenerator, NotifyError, OrderNotifier, FALLBACK_COMMENT,
};
use forno_core::{compute_totals, Checkout, Configuration, Intensity, Menu};

/// Comment generator answering with a canned line
struct CannedComment;

#[async_trait]
impl CommentGenerator for CannedComment {
    async fn comment_for(&self, _summary: &str) -> Result<String, ChatError> {
        Ok("به‌به، چه انتخابی!".to_string())
    }
}

/// Comment generator that always fails
struct UnreachableComment;

#[async_trait]
impl CommentGenerator for UnreachableComment {
    async fn comment_for(&self, _summary: &str) -> Result<String, ChatError> {
        Err(ChatError::NetworkError("connection refused".to_string()))
    }
}

/// Notifier recording every delivered receipt
#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
}

#[async_trait]
impl OrderNotifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Notifier that always fails delivery
struct BrokenNotifier;

#[async_trait]
impl OrderNotifier for BrokenNotifier {
    async fn notify(&self, _text: &str) -> Result<(), NotifyError> {
        Err(NotifyError::ApiError(500))
    }
}

fn pepperoni_order() -> Configuration {
    let mut config = Configuration::default();
    config
        .meats
        .insert("pepperoni".to_string(), Intensity::Normal);
    config
}

#[tokio::test]
async fn test_finalize_returns_order_result_and_notifies() {
    let comment = CannedComment;
    let notifier = RecordingNotifier::default();
    let config = pepperoni_order();
    let menu = Menu::standard();

    let result = Checkout::new(&comment, &notifier)
        .finalize(&config, menu)
        .await;

    let expected = compute_totals(&config, menu);
    assert_eq!(result.total_price, expected.price);
    assert_eq!(result.total_calories, expected.calories);
    assert_eq!(result.chef_comment, "به‌به، چه انتخابی!");

    assert_eq!(result.order_id.len(), 6);
    let id: u32 = result.order_id.parse().expect("numeric order id");
    assert!((100_000..=999_999).contains(&id));

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let receipt = &sent[0];
    assert!(receipt.contains(&result.order_id));
    assert!(receipt.contains("پپرونی ۹۰٪"));
    assert!(receipt.contains("395,000 تومان"));
    assert!(receipt.contains(&result.chef_comment));
}

#[tokio::test]
async fn test_comment_failure_falls_back_and_checkout_succeeds() {
    let comment = UnreachableComment;
    let notifier = RecordingNotifier::default();
    let config = Configuration::default();
    let menu = Menu::standard();

    let result = Checkout::new(&comment, &notifier)
        .finalize(&config, menu)
        .await;

    assert_eq!(result.chef_comment, FALLBACK_COMMENT);
    assert_eq!(result.total_price, 340_000);

    // The receipt still goes out, carrying the fallback comment.
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains(FALLBACK_COMMENT));
}

#[tokio::test]
async fn test_notification_failure_does_not_affect_result() {
    let comment = CannedComment;
    let notifier = BrokenNotifier;
    let config = pepperoni_order();
    let menu = Menu::standard();

    let result = Checkout::new(&comment, &notifier)
        .finalize(&config, menu)
        .await;

    assert_eq!(result.total_price, 395_000);
    assert_eq!(result.chef_comment, "به‌به، چه انتخابی!");
}

#[tokio::test]
async fn test_every_failure_at_once_still_completes() {
    let comment = UnreachableComment;
    let notifier = BrokenNotifier;
    let config = Configuration {
        sauce: None,
        ..Configuration::default()
    };
    let menu = Menu::standard();

    let result = Checkout::new(&comment, &notifier)
        .finalize(&config, menu)
        .await;

    assert_eq!(result.chef_comment, FALLBACK_COMMENT);
    assert_eq!(result.total_price, 340_000);
    assert_eq!(result.total_calories, 2200);
}

#[tokio::test]
async fn test_summary_passed_to_generator_uses_names() {
    struct SummaryCapture {
        seen: Mutex<Option<String>>,
    }

    #[async_trait]
    impl CommentGenerator for SummaryCapture {
        async fn comment_for(&self, summary: &str) -> Result<String, ChatError> {
            *self.seen.lock().unwrap() = Some(summary.to_string());
            Ok("ممنون!".to_string())
        }
    }

    let comment = SummaryCapture {
        seen: Mutex::new(None),
    };
    let notifier = RecordingNotifier::default();
    let mut config = Configuration::default();
    config
        .veggies
        .insert("mushroom".to_string(), Intensity::Normal);

    Checkout::new(&comment, &notifier)
        .finalize(&config, Menu::standard())
        .await;

    let summary = comment.seen.lock().unwrap().clone().unwrap();
    assert!(summary.contains("قارچ اسلایس"));
    assert!(!summary.contains("mushroom"));
}
