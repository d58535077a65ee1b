use once_cell::sync::Lazy;
use regex::RegexSet;

/// The endpoint the gate itself calls; always let through.
pub const STATUS_CHECK_PATH: &str = "/api/check-subscription";

pub const PUBLIC_PATTERNS: &[&str] = &[
    "/",
    "/health(.*)",
    "/sign-up(.*)",
    "/subscribe(.*)",
    "/api/checkout(.*)",
    "/api/stripe-webhook(.*)",
    "/api/check-subscription(.*)",
];
pub const SIGN_UP_PATTERNS: &[&str] = &["/sign-up(.*)"];
pub const MEAL_PLAN_PATTERNS: &[&str] = &["/mealplan(.*)"];
pub const PROFILE_PATTERNS: &[&str] = &["/profile(.*)"];

const STATIC_EXTENSIONS: &[&str] = &[
    "html", "htm", "css", "js", "jpg", "jpeg", "webp", "png", "gif", "svg", "ttf", "woff",
    "woff2", "ico", "csv", "doc", "docx", "xls", "xlsx", "zip", "webmanifest",
];

/// How the gate treats a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Exactly [`STATUS_CHECK_PATH`].
    StatusCheck,
    /// Sign-up pages; also public.
    SignUp,
    Public,
    MealPlan,
    Profile,
    /// Anything else: sign-in required, no subscription check.
    Protected,
}

impl RouteClass {
    pub fn is_public(self) -> bool {
        matches!(self, Self::StatusCheck | Self::SignUp | Self::Public)
    }

    pub fn requires_subscription(self) -> bool {
        matches!(self, Self::MealPlan | Self::Profile)
    }
}

/// Anchored path patterns. `(.*)` is a plain regex group, so
/// `/sign-up(.*)` matches `/sign-up` and everything below it.
#[derive(Debug, Clone)]
pub struct RouteMatcher {
    set: RegexSet,
}

impl RouteMatcher {
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let anchored = patterns.iter().map(|p| format!("^{p}$"));
        Ok(Self {
            set: RegexSet::new(anchored)?,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.set.is_match(path)
    }
}

#[derive(Debug, Clone)]
pub struct RouteRules {
    public: RouteMatcher,
    sign_up: RouteMatcher,
    meal_plan: RouteMatcher,
    profile: RouteMatcher,
}

static STANDARD: Lazy<RouteRules> = Lazy::new(|| {
    RouteRules::new(
        PUBLIC_PATTERNS,
        SIGN_UP_PATTERNS,
        MEAL_PLAN_PATTERNS,
        PROFILE_PATTERNS,
    )
    .expect("built-in route patterns are valid regexes")
});

impl RouteRules {
    pub fn new(
        public: &[&str],
        sign_up: &[&str],
        meal_plan: &[&str],
        profile: &[&str],
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            public: RouteMatcher::new(public)?,
            sign_up: RouteMatcher::new(sign_up)?,
            meal_plan: RouteMatcher::new(meal_plan)?,
            profile: RouteMatcher::new(profile)?,
        })
    }

    /// The application's route table.
    pub fn standard() -> &'static RouteRules {
        &STANDARD
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if path == STATUS_CHECK_PATH {
            RouteClass::StatusCheck
        } else if self.sign_up.matches(path) {
            RouteClass::SignUp
        } else if self.public.matches(path) {
            RouteClass::Public
        } else if self.meal_plan.matches(path) {
            RouteClass::MealPlan
        } else if self.profile.matches(path) {
            RouteClass::Profile
        } else {
            RouteClass::Protected
        }
    }
}

/// Static files outside `/api` bypass the gate entirely.
pub fn is_static_asset(path: &str) -> bool {
    if path == "/api" || path.starts_with("/api/") {
        return false;
    }
    let last_segment = path.rsplit('/').next().unwrap_or("");
    match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => STATIC_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}
