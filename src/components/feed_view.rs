//! Photo Feed View
//!
//! Upload form plus two post grids: the community's posts and the
//! signed-in user's own. Both lists are re-fetched after a successful
//! upload so the new post shows up with its server-assigned fields.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};

use crate::api::{self, ApiClient};
use crate::context::use_app_context;
use crate::models::Post;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

async fn load_feed(client: ApiClient, store: AppStore) {
    match api::feed::get_posts(&client).await {
        Ok(posts) => *store.my_posts().write() = posts,
        Err(err) => log::error!("Failed to fetch own posts: {err}"),
    }
    match api::feed::all_posts(&client).await {
        Ok(posts) => *store.other_posts().write() = posts,
        Err(err) => log::error!("Failed to fetch feed: {err}"),
    }
}

#[component]
pub fn FeedView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (caption, set_caption) = signal(String::new());
    let (file_name, set_file_name) = signal(String::new());
    let (posting, set_posting) = signal(false);
    let (error_message, set_error_message) = signal(String::new());
    let file_input: NodeRef<html::Input> = NodeRef::new();

    Effect::new(move |_| {
        spawn_local(async move {
            load_feed(ApiClient::new(ctx.session), store).await;
        });
    });

    let submit_post = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let caption_val = caption.get();
        let file = file_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            set_error_message.set("Please add both a photo and a caption.".to_string());
            return;
        };
        if caption_val.trim().is_empty() {
            set_error_message.set("Please add both a photo and a caption.".to_string());
            return;
        }
        set_error_message.set(String::new());
        set_posting.set(true);

        spawn_local(async move {
            let client = ApiClient::new(ctx.session);
            match api::feed::create_post(&client, &caption_val, &file).await {
                Ok(()) => {
                    set_caption.set(String::new());
                    set_file_name.set(String::new());
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                    load_feed(client, store).await;
                }
                Err(err) => {
                    log::error!("Failed to create post: {err}");
                    set_error_message.set("Failed to upload the post. Please try again.".to_string());
                }
            }
            set_posting.set(false);
        });
    };

    view! {
        <section class="feed">
            <form class="post-form" on:submit=submit_post>
                <input
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        let name = input
                            .files()
                            .and_then(|files| files.get(0))
                            .map(|file| file.name())
                            .unwrap_or_default();
                        set_file_name.set(name);
                    }
                />
                <input
                    type="text"
                    placeholder="Write a caption..."
                    prop:value=move || caption.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_caption.set(input.value());
                    }
                />
                <button type="submit" class="btn-primary" disabled=move || posting.get()>
                    {move || if posting.get() { "Posting..." } else { "Post" }}
                </button>
                {move || {
                    let msg = error_message.get();
                    (!msg.is_empty()).then(|| view! { <p class="form-error">{msg}</p> })
                }}
                {move || {
                    let name = file_name.get();
                    (!name.is_empty()).then(|| view! { <p class="file-name">{name}</p> })
                }}
            </form>

            <h2>"User Feed"</h2>
            <div class="post-grid">
                {move || {
                    let posts = store.my_posts().get();
                    if posts.is_empty() {
                        view! {
                            <p class="feed-empty">
                                "No posts available. Be the first to share something!"
                            </p>
                        }
                        .into_any()
                    } else {
                        posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <h2>"Other Posts"</h2>
            <div class="post-grid">
                {move || {
                    let posts = store.other_posts().get();
                    if posts.is_empty() {
                        view! {
                            <p class="feed-empty">"No posts available from others."</p>
                        }
                        .into_any()
                    } else {
                        posts
                            .into_iter()
                            .map(|post| view! { <PostCard post=post /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </section>
    }
}

/// Locale-formatted creation time for a post
fn format_timestamp(created_at: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(created_at));
    date.to_locale_string("en-US", &JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| created_at.to_string())
}

#[component]
fn PostCard(post: Post) -> impl IntoView {
    view! {
        <div class="post-card">
            <img class="post-image" src=post.photo_url.clone() alt=post.caption.clone() />
            <p class="post-caption">{post.caption.clone()}</p>
            <span class="post-timestamp">{format_timestamp(&post.created_at)}</span>
        </div>
    }
}
