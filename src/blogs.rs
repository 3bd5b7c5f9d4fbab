use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;

use gemdesk_core::protocol::{BlogDraft, BlogPost};

use crate::app_context::{AppContext, ContextProps};
use crate::notify::NoticeLevel;

#[function_component(BlogsPage)]
pub(crate) fn blogs_page(props: &ContextProps) -> Html {
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);
    let title = use_state(String::new);
    let body = use_state(String::new);
    let tags = use_state(String::new);

    {
        let context = props.context.clone();
        let posts = posts.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match context.api.list_blogs().await {
                    Ok(list) => posts.set(list),
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_title = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            title.set(input.value());
        })
    };
    let on_body = {
        let body = body.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            body.set(area.value());
        })
    };
    let on_tags = {
        let tags = tags.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            tags.set(input.value());
        })
    };

    let on_submit = {
        let context = props.context.clone();
        let posts = posts.clone();
        let title = title.clone();
        let body = body.clone();
        let tags = tags.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if title.trim().is_empty() || body.trim().is_empty() {
                context
                    .notices
                    .push(NoticeLevel::Error, "Title and body are required");
                return;
            }
            let draft = BlogDraft {
                title: title.trim().to_string(),
                body: (*body).clone(),
                tags: split_tags(&tags),
                published: false,
            };
            let context = context.clone();
            let posts = posts.clone();
            let title = title.clone();
            let body = body.clone();
            let tags = tags.clone();
            spawn_local(async move {
                match context.api.create_blog(&draft).await {
                    Ok(post) => {
                        let mut next = (*posts).clone();
                        next.insert(0, post);
                        posts.set(next);
                        title.set(String::new());
                        body.set(String::new());
                        tags.set(String::new());
                        context
                            .notices
                            .push(NoticeLevel::Success, "Draft post created");
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };

    html! {
        <section class="page page-blogs">
            <form class="inline-form" onsubmit={on_submit}>
                <div class="control">
                    <label for="blog-title">{ "Title" }</label>
                    <input id="blog-title" type="text" value={(*title).clone()} oninput={on_title} />
                </div>
                <div class="control">
                    <label for="blog-body">{ "Body" }</label>
                    <textarea id="blog-body" value={(*body).clone()} oninput={on_body} />
                </div>
                <div class="control">
                    <label for="blog-tags">{ "Tags (comma separated)" }</label>
                    <input id="blog-tags" type="text" value={(*tags).clone()} oninput={on_tags} />
                </div>
                <button type="submit">{ "Create draft" }</button>
            </form>
            if *loading {
                <p class="page-loading">{ "Loading posts…" }</p>
            } else if posts.is_empty() {
                <p class="page-empty">{ "No posts yet" }</p>
            } else {
                <ul class="blog-list">
                    {
                        for posts.iter().map(|post| blog_item(
                            props.context.clone(),
                            posts.clone(),
                            post.clone(),
                        ))
                    }
                </ul>
            }
        </section>
    }
}

fn blog_item(
    context: Rc<AppContext>,
    posts: UseStateHandle<Vec<BlogPost>>,
    post: BlogPost,
) -> Html {
    let on_publish_toggle = {
        let context = context.clone();
        let posts = posts.clone();
        let post = post.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let draft = BlogDraft {
                title: post.title.clone(),
                body: post.body.clone(),
                tags: post.tags.clone(),
                published: input.checked(),
            };
            let context = context.clone();
            let posts = posts.clone();
            let post_id = post.id;
            spawn_local(async move {
                match context.api.update_blog(post_id, &draft).await {
                    Ok(updated) => {
                        let next: Vec<BlogPost> = posts
                            .iter()
                            .map(|item| {
                                if item.id == updated.id {
                                    updated.clone()
                                } else {
                                    item.clone()
                                }
                            })
                            .collect();
                        posts.set(next);
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    let on_delete = {
        let context = context.clone();
        let posts = posts.clone();
        let post_id = post.id;
        let post_title = post.title.clone();
        Callback::from(move |_event: MouseEvent| {
            let context = context.clone();
            let posts = posts.clone();
            let post_title = post_title.clone();
            spawn_local(async move {
                match context.api.delete_blog(post_id).await {
                    Ok(()) => {
                        let next: Vec<BlogPost> = posts
                            .iter()
                            .filter(|item| item.id != post_id)
                            .cloned()
                            .collect();
                        posts.set(next);
                        context
                            .notices
                            .push(NoticeLevel::Success, format!("Deleted {post_title}"));
                    }
                    Err(error) => context.notices.push(NoticeLevel::Error, error.to_string()),
                }
            });
        })
    };
    html! {
        <li key={post.id.to_string()} class="blog-item">
            <span class="blog-title">{ post.title.clone() }</span>
            if !post.tags.is_empty() {
                <span class="blog-tags">{ post.tags.join(", ") }</span>
            }
            <label class="blog-published">
                { "Published" }
                <input type="checkbox" checked={post.published} onchange={on_publish_toggle} />
            </label>
            <button type="button" class="danger" onclick={on_delete}>{ "Delete" }</button>
        </li>
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
