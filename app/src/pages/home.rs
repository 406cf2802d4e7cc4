use leptos::prelude::*;

use crate::components::Picture;
use crate::pages::blog::BlogPosts;

pub const AVATAR_SRC: &str = "/image/adela-avatar.jpg";
pub const AVATAR_SIZE: u32 = 96;

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <main class="home">
            <ProfileCard />
            <section class="posts">
                <BlogPosts />
            </section>
        </main>
    }
}

/// Avatar plus bio blurb. Static; how posts are sourced and ordered is
/// entirely the store's business.
#[component]
pub fn ProfileCard() -> impl IntoView {
    view! {
        <section class="profile">
            <Picture
                src=AVATAR_SRC
                alt="Adela Ramadhina"
                width=AVATAR_SIZE
                height=AVATAR_SIZE
            />
            <div class="blurb">
                <h1>"Adela Ramadhina's Diary"</h1>
                <p>
                    "cyber security but I break things (for legal reasons mostly). appsec & devsecops apologist. professional beep booper 🖥️."
                </p>
            </div>
        </section>
    }
}
