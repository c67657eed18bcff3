//! Behavior script synthesis.
//!
//! The script is static apart from the resume helper, whose body is chosen
//! when the site is generated: a record with a resume gets a download
//! trigger for the embedded file, a record without one gets a notice.

use folio_model::ContentRecord;

/// Notice shown by the resume helper when no resume was embedded.
pub const RESUME_UNAVAILABLE: &str = "Resume not available for download.";

/// Script generator.
pub struct BehaviorSynthesizer;

impl BehaviorSynthesizer {
    /// Generate the behavior script for a record.
    ///
    /// With `escape` unset, embedded strings are inserted raw.
    pub fn render(record: &ContentRecord, escape: bool) -> String {
        let helper = resume_helper(record, escape);
        [SCRIPT_PRELUDE, helper.as_str(), SCRIPT_EFFECTS].concat()
    }
}

/// The `downloadResume()` function body for this record.
fn resume_helper(record: &ContentRecord, escape: bool) -> String {
    let quote = |s: &str| {
        if escape {
            escape_string(s)
        } else {
            s.to_string()
        }
    };

    match record.resume() {
        Some(resume) => {
            let owner = record
                .personal_info
                .full_name
                .as_deref()
                .unwrap_or("Resume");
            format!(
                r#"// Resume download function
function downloadResume() {{
    const link = document.createElement('a');
    link.href = '{href}';
    link.download = '{owner}_Resume.pdf';
    document.body.appendChild(link);
    link.click();
    document.body.removeChild(link);
}}
"#,
                href = quote(resume),
                owner = quote(owner),
            )
        }
        None => format!(
            r#"// Resume download function
function downloadResume() {{
    alert('{notice}');
}}
"#,
            notice = RESUME_UNAVAILABLE,
        ),
    }
}

/// Escape a string for a single-quoted JavaScript literal.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace("</", "<\\/")
}

const SCRIPT_PRELUDE: &str = r##"// Initialize Lucide icons
if (typeof lucide !== 'undefined') {
    lucide.createIcons();
}

// Mobile menu toggle
const hamburger = document.querySelector('.hamburger');
const navMenu = document.querySelector('.nav-menu');

hamburger.addEventListener('click', () => {
    hamburger.classList.toggle('active');
    navMenu.classList.toggle('active');
});

// Close mobile menu when clicking on a link
document.querySelectorAll('.nav-link').forEach(link => link.addEventListener('click', () => {
    hamburger.classList.remove('active');
    navMenu.classList.remove('active');
}));

// Smooth scrolling for in-page links
document.querySelectorAll('a[href^="#"]').forEach(anchor => {
    anchor.addEventListener('click', function (e) {
        const href = this.getAttribute('href');
        if (href === '#') {
            return;
        }
        e.preventDefault();
        const target = document.querySelector(href);
        if (target) {
            target.scrollIntoView({
                behavior: 'smooth',
                block: 'start'
            });
        }
    });
});

// Navbar background on scroll
window.addEventListener('scroll', () => {
    const navbar = document.querySelector('.navbar');
    if (window.scrollY > 100) {
        navbar.style.background = 'rgba(255, 255, 255, 0.98)';
    } else {
        navbar.style.background = 'rgba(255, 255, 255, 0.95)';
    }
});

// Animate sections on scroll
const observerOptions = {
    threshold: 0.1,
    rootMargin: '0px 0px -50px 0px'
};

const observer = new IntersectionObserver((entries) => {
    entries.forEach(entry => {
        if (entry.isIntersecting) {
            entry.target.style.animationDelay = '0.2s';
            entry.target.style.animationFillMode = 'both';
            entry.target.style.animationName = 'fadeInUp';
            entry.target.style.animationDuration = '0.6s';
        }
    });
}, observerOptions);

document.querySelectorAll('section').forEach(section => {
    observer.observe(section);
});

"##;

const SCRIPT_EFFECTS: &str = r##"
// Loading spinner on external buttons
document.querySelectorAll('.btn').forEach(btn => {
    btn.addEventListener('click', function () {
        if (this.getAttribute('href') === '#' || this.getAttribute('onclick')) {
            return;
        }

        const originalText = this.innerHTML;
        this.innerHTML = '<span style="display: inline-block; width: 20px; height: 20px; border: 2px solid transparent; border-top: 2px solid currentColor; border-radius: 50%; animation: spin 1s linear infinite;"></span>';

        setTimeout(() => {
            this.innerHTML = originalText;
        }, 1000);
    });
});

// Typing effect for hero title
function typeWriter(element, text, speed = 100) {
    let i = 0;
    element.textContent = '';

    function type() {
        if (i < text.length) {
            element.textContent += text.charAt(i);
            i++;
            setTimeout(type, speed);
        }
    }

    type();
}

window.addEventListener('load', () => {
    const heroTitle = document.querySelector('.hero-title');
    if (heroTitle) {
        typeWriter(heroTitle, heroTitle.textContent, 100);
    }
});
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::PersonalInfo;

    fn record(name: Option<&str>, resume: Option<&str>) -> ContentRecord {
        ContentRecord {
            personal_info: PersonalInfo {
                full_name: name.map(str::to_string),
                ..Default::default()
            },
            resume_file: resume.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn escape_string_works() {
        assert_eq!(escape_string("hello"), "hello");
        assert_eq!(escape_string("it's"), "it\\'s");
        assert_eq!(escape_string("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_string("</script>"), "<\\/script>");
    }

    #[test]
    fn embeds_download_trigger_with_resume() {
        let js = BehaviorSynthesizer::render(
            &record(Some("Ada"), Some("data:application/pdf;base64,JVBERi0=")),
            true,
        );

        assert!(js.contains("link.href = 'data:application/pdf;base64,JVBERi0=';"));
        assert!(js.contains("link.download = 'Ada_Resume.pdf';"));
        assert!(!js.contains(RESUME_UNAVAILABLE));
    }

    #[test]
    fn emits_notice_without_resume() {
        let js = BehaviorSynthesizer::render(&record(Some("Ada"), None), true);

        assert!(js.contains("function downloadResume()"));
        assert!(js.contains("alert('Resume not available for download.');"));
        assert!(!js.contains("link.download"));
    }

    #[test]
    fn resume_is_the_only_difference() {
        let with = BehaviorSynthesizer::render(&record(None, Some("data:x")), true);
        let without = BehaviorSynthesizer::render(&record(None, None), true);

        assert!(with.starts_with(SCRIPT_PRELUDE));
        assert!(without.starts_with(SCRIPT_PRELUDE));
        assert!(with.ends_with(SCRIPT_EFFECTS));
        assert!(without.ends_with(SCRIPT_EFFECTS));
        assert!(with.contains("link.download = 'Resume_Resume.pdf';"));
    }

    #[test]
    fn escapes_owner_name_unless_disabled() {
        let record = record(Some("O'Brien"), Some("data:x"));

        let escaped = BehaviorSynthesizer::render(&record, true);
        let raw = BehaviorSynthesizer::render(&record, false);

        assert!(escaped.contains(r"link.download = 'O\'Brien_Resume.pdf';"));
        assert!(raw.contains("link.download = 'O'Brien_Resume.pdf';"));
    }

    #[test]
    fn wires_navigation_and_section_animation() {
        let js = BehaviorSynthesizer::render(&ContentRecord::default(), true);

        assert!(js.contains("document.querySelector('.hamburger')"));
        assert!(js.contains("document.querySelector('.nav-menu')"));
        assert!(js.contains("window.scrollY > 100"));
        assert!(js.contains("new IntersectionObserver"));
        assert!(js.contains("document.querySelectorAll('section')"));
        assert!(js.contains(r##"document.querySelectorAll('a[href^="#"]')"##));
        assert!(js.contains("typeWriter(heroTitle, heroTitle.textContent, 100);"));
    }
}
