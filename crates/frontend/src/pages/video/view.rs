//! Video page - view component

use leptos::prelude::*;
use thaw::*;

use super::model::generate_video;
use super::view_model::{view_state, VideoPageVm, ViewState};
use crate::shared::components::empty::Empty;
use crate::shared::components::page_header::PageHeader;
use crate::shared::toast::ToastService;
use crate::system::usage::context::use_usage;
use contracts::domain::video_generation::PROMPT_RULES;

#[component]
pub fn VideoPage() -> impl IntoView {
    let vm = VideoPageVm::new();
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let usage = use_usage();

    // Submit handler - using Callback so both the button and the input's
    // Enter key can trigger it
    let handle_submit = Callback::new(move |_| {
        let prompt = vm.prompt.get();

        // Client-side validation gate: no request leaves on failure.
        if let Err(e) = PROMPT_RULES.validate_string(&prompt, "Prompt") {
            vm.prompt_error.set(Some(e));
            return;
        }
        vm.prompt_error.set(None);

        // Clear the previous result before dispatch so the loading state
        // is never shown alongside a stale video.
        vm.video.set(None);
        vm.is_submitting.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            match generate_video(prompt).await {
                Ok(url) => {
                    vm.video.set(Some(url));
                }
                Err(e) => {
                    log::warn!("video generation failed: {}", e);
                    toasts.error("Something went wrong, try again later");
                }
            }
            vm.is_submitting.set(false);
            // Quota moved (or at least may have); let dependent UI re-fetch.
            usage.refresh();
        });
    });

    view! {
        <div class="video-page">
            <PageHeader
                title="Video Creator"
                subtitle="Our most advanced video generator model"
                icon_name="film"
            />

            <div class="video-page__form">
                <Flex align=FlexAlign::Center style="gap: 8px;">
                    <div style="flex: 1;">
                        <Input
                            value=vm.prompt
                            placeholder="Clown fish swimming around a coral reef"
                            disabled=vm.is_submitting
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    handle_submit.run(());
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=vm.is_submitting
                        on_click=move |_| handle_submit.run(())
                    >
                        "Generate"
                    </Button>
                </Flex>

                // Field-level validation error
                {move || {
                    vm.prompt_error
                        .get()
                        .map(|e| view! { <div class="video-page__field-error">{e}</div> })
                }}
            </div>

            <div class="video-page__output">
                {move || match view_state(vm.is_submitting.get(), vm.video.get()) {
                    ViewState::Loading => view! {
                        <div class="video-page__loading">
                            <Spinner />
                        </div>
                    }
                    .into_any(),
                    ViewState::Empty => view! {
                        <Empty label="No video has been generated" />
                    }
                    .into_any(),
                    ViewState::Result(url) => view! {
                        <video class="video-page__player" controls>
                            <source src=url />
                        </video>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
