//! In-process stand-ins for the outbound collaborators.

use std::sync::Mutex;

use async_trait::async_trait;
use mealplan_backend::ai::{AiError, CompletionModel, CompletionParams};
use mealplan_backend::gate::{SubscriptionCheck, SubscriptionCheckError};
use mealplan_backend::payments::{
    CheckoutSession, CheckoutSessionRequest, PaymentError, PaymentGateway,
};

/// Payment gateway that records requests and answers from a script.
pub struct StubGateway {
    outcome: Result<String, String>,
    pub requests: Mutex<Vec<CheckoutSessionRequest>>,
}

impl StubGateway {
    pub fn returning_url(url: &str) -> Self {
        Self {
            outcome: Ok(url.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_with(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn last_request(&self) -> Option<CheckoutSessionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.outcome {
            Ok(url) => Ok(CheckoutSession {
                id: "cs_test_123".to_string(),
                url: url.clone(),
            }),
            Err(message) => Err(PaymentError::Provider {
                status: 400,
                message: message.clone(),
            }),
        }
    }
}

/// Completion model with a canned reply.
pub struct StubCompletion {
    reply: Option<String>,
    pub prompts: Mutex<Vec<(String, CompletionParams)>>,
}

impl StubCompletion {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails as if the API were down.
    pub fn unavailable() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn last_prompt(&self) -> Option<(String, CompletionParams)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionModel for StubCompletion {
    async fn complete(&self, prompt: &str, params: CompletionParams) -> Result<String, AiError> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), params));
        self.reply.clone().ok_or(AiError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub enum CheckAnswer {
    Active,
    Inactive,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCall {
    pub origin: String,
    pub user_id: String,
    pub cookie: Option<String>,
}

/// Subscription check with a fixed answer that records each call.
pub struct StubSubscriptionCheck {
    answer: CheckAnswer,
    pub calls: Mutex<Vec<CheckCall>>,
}

impl StubSubscriptionCheck {
    pub fn new(answer: CheckAnswer) -> Self {
        Self {
            answer,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CheckCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionCheck for StubSubscriptionCheck {
    async fn is_active(
        &self,
        origin: &str,
        user_id: &str,
        cookie: Option<&str>,
    ) -> Result<bool, SubscriptionCheckError> {
        self.calls.lock().unwrap().push(CheckCall {
            origin: origin.to_string(),
            user_id: user_id.to_string(),
            cookie: cookie.map(str::to_string),
        });
        match self.answer {
            CheckAnswer::Active => Ok(true),
            CheckAnswer::Inactive => Ok(false),
            CheckAnswer::Fail => Err(SubscriptionCheckError::Status(502)),
        }
    }
}
