use chrono::Datelike;
use leptos::prelude::*;

/// Icon shown next to a social link. The actual glyphs live in the
/// stylesheet; this only picks the class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    LinkedIn,
    GitHub,
}

impl Icon {
    pub fn css_class(self) -> &'static str {
        match self {
            Icon::LinkedIn => "icon icon-linkedin",
            Icon::GitHub => "icon icon-github",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

/// The footer's outbound links, in display order.
pub static SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/adela-r-82a285184/",
        icon: Icon::LinkedIn,
    },
    SocialLink {
        label: "GitHub",
        url: "https://github.com/adelaramadhina",
        icon: Icon::GitHub,
    },
];

/// The copyright line is a function of the date so that the footer stays a
/// deterministic rendering; the component feeds it the system clock.
pub fn copyright_line(today: chrono::NaiveDate) -> String {
    format!("© {}. With ♡ and Leptos", today.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = copyright_line(chrono::Local::now().date_naive());

    view! {
        <footer>
            <ul class="social-links">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| view! {
                        <li>
                            <a
                                href=link.url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                <span class=link.icon.css_class() aria-hidden="true"></span>
                                {link.label}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
            <p class="copyright">{copyright}</p>
        </footer>
    }
}

/// Stand-in for an image optimization pipeline: pages only hand over a source
/// path, intrinsic dimensions, and alt text. Swapping in a real optimizer
/// later only touches this component.
#[component]
pub fn Picture(
    src: &'static str,
    alt: &'static str,
    width: u32,
    height: u32,
) -> impl IntoView {
    view! {
        <img
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            loading="lazy"
            decoding="async"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_are_linkedin_then_github() {
        assert_eq!(2, SOCIAL_LINKS.len());
        assert_eq!(Icon::LinkedIn, SOCIAL_LINKS[0].icon);
        assert_eq!(Icon::GitHub, SOCIAL_LINKS[1].icon);
        assert_eq!("LinkedIn", SOCIAL_LINKS[0].label);
        assert_eq!("GitHub", SOCIAL_LINKS[1].label);
    }

    #[test]
    fn social_links_point_outbound() {
        for link in SOCIAL_LINKS.iter() {
            assert!(link.url.starts_with("https://"), "{}", link.url);
        }
    }

    #[test]
    fn copyright_line_tracks_the_year() {
        let y2024 = chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let y2025 = chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let before = copyright_line(y2024);
        let after = copyright_line(y2025);
        assert!(before.contains("2024"), "{before}");
        assert_eq!(before.replace("2024", "2025"), after);
    }
}
