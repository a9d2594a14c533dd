use std::time::Duration;

/// Form relay that forwards contact submissions by email.
///
/// Can be overridden at build time with `CONTACT_FORM_ENDPOINT`.
pub const CONTACT_FORM_ENDPOINT: &str = match option_env!("CONTACT_FORM_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "https://formspree.io/f/xjkwewqn",
};

/// How long the "Message Sent!" panel stays up before the form comes back.
pub const SUBMITTED_RESET_DELAY: Duration = Duration::from_secs(5);

/// Delay between a skills card revealing and its proficiency bars filling.
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(300);

pub const SITE_TITLE: &str = "Wisdom Dzontoh - Software Engineer & Health Informatician";
pub const SITE_DESCRIPTION: &str = "Portfolio of Wisdom Dzontoh, a software engineer and health informatician specializing in Django, React, and health information systems.";

pub const CV_PATH: &str = "/assets/Wisdom_Dzontoh_CV.pdf";
pub const RESUME_URL: &str =
    "https://drive.google.com/uc?export=download&id=1watZAeRuLBZeCcoAMfuefS_wVUV7I9vt";
pub const PORTFOLIO_VIDEO_PATH: &str = "/assets/portfolio.mp4";

pub const EMAIL: &str = "wisdomdzontoh@gmail.com";
pub const PHONE_DISPLAY: &str = "+233 558 749 735";
pub const PHONE_HREF: &str = "tel:+233558749735";
pub const LOCATION: &str = "Accra, Ghana";
pub const GITHUB_URL: &str = "https://github.com/wisdomdzontoh";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/wisdom-dzontoh-563430195";
pub const TWITTER_URL: &str = "https://twitter.com/wisdomdzontoh";

/// Year the bundle was built, exported by `build.rs`.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timings() {
        assert_eq!(SUBMITTED_RESET_DELAY, Duration::from_secs(5));
        assert_eq!(SKILL_BAR_DELAY, Duration::from_millis(300));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(), "mailto:wisdomdzontoh@gmail.com");
    }
}
