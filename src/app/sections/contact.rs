use leptos::{html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::super::reveal::use_reveal;
use super::SectionHeading;

/// Simulated processing time before a submission "succeeds".
const SUBMIT_DELAY_MS: f64 = 1500.0;
/// How long the success banner stays up.
const BANNER_RESET_MS: f64 = 5000.0;

const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d143104.00436166497!2d-4.430835487452717!3d55.85417342346986!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x488815562056ceeb%3A0x71e683b805ef511e!2sGlasgow%2C%20UK!5e0!3m2!1sen!2sus!4v1621600377988!5m2!1sen!2sus";

#[component]
pub fn ContactSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let UseTimeoutFnReturn {
        start: start_reset,
        stop: stop_reset,
        ..
    } = use_timeout_fn(move |()| set_submitted.set(false), BANNER_RESET_MS);

    // submission is simulated unconditionally successful; there is no
    // network call and no failure path
    let UseTimeoutFnReturn {
        start: start_submit,
        stop: stop_submit,
        ..
    } = use_timeout_fn(
        move |()| {
            set_submitting.set(false);
            set_submitted.set(true);
            set_name.set(String::new());
            set_email.set(String::new());
            set_subject.set(String::new());
            set_message.set(String::new());
            start_reset(());
        },
        SUBMIT_DELAY_MS,
    );
    on_cleanup(move || {
        stop_submit();
        stop_reset();
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        log::info!("contact form submission simulated");
        set_submitting.set(true);
        start_submit(());
    };

    view! {
        <section
            node_ref=section_ref
            id="contact"
            class="py-20 px-4 relative overflow-hidden section-content"
            class:revealed=move || revealed.get()
        >
            <div class="container mx-auto">
                <SectionHeading
                    title="Contact Me"
                    lede="Feel free to reach out! I'm always open to discussing new projects, opportunities, or just having a chat."
                />

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-10">
                    <div class="lg:col-span-2">
                        <div class="card border divider rounded-2xl p-8 shadow-sm h-full">
                            <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>

                            {move || {
                                submitted
                                    .get()
                                    .then(|| {
                                        view! {
                                            <div class="banner-success rounded-lg p-4 mb-6">
                                                <p>
                                                    "Your message has been sent successfully! I'll get back to you soon."
                                                </p>
                                            </div>
                                        }
                                    })
                            }}

                            <form on:submit=submit class="space-y-6">
                                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                                    <div>
                                        <label for="name" class="block text-sm font-medium mb-2">
                                            "Your Name"
                                        </label>
                                        <input
                                            id="name"
                                            name="name"
                                            type="text"
                                            prop:value=name
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                            required
                                            class="w-full px-4 py-3 rounded-lg border field focus:outline-none focus:ring-2"
                                            placeholder="John Doe"
                                        />
                                    </div>
                                    <div>
                                        <label for="email" class="block text-sm font-medium mb-2">
                                            "Your Email"
                                        </label>
                                        <input
                                            id="email"
                                            name="email"
                                            type="email"
                                            prop:value=email
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                            required
                                            class="w-full px-4 py-3 rounded-lg border field focus:outline-none focus:ring-2"
                                            placeholder="example@email.com"
                                        />
                                    </div>
                                </div>

                                <div>
                                    <label for="subject" class="block text-sm font-medium mb-2">
                                        "Subject"
                                    </label>
                                    <input
                                        id="subject"
                                        name="subject"
                                        type="text"
                                        prop:value=subject
                                        on:input=move |ev| set_subject.set(event_target_value(&ev))
                                        required
                                        class="w-full px-4 py-3 rounded-lg border field focus:outline-none focus:ring-2"
                                        placeholder="How can I help you?"
                                    />
                                </div>

                                <div>
                                    <label for="message" class="block text-sm font-medium mb-2">
                                        "Message"
                                    </label>
                                    <textarea
                                        id="message"
                                        name="message"
                                        rows=5
                                        prop:value=message
                                        on:input=move |ev| set_message.set(event_target_value(&ev))
                                        required
                                        class="w-full px-4 py-3 rounded-lg border field focus:outline-none focus:ring-2 resize-none"
                                        placeholder="Your message here..."
                                    ></textarea>
                                </div>

                                <button
                                    type="submit"
                                    disabled=move || submitting.get()
                                    class="w-full px-6 py-3 rounded-lg font-medium text-white bg-accent flex items-center justify-center gap-2 disabled:opacity-70"
                                >
                                    {move || {
                                        if submitting.get() { "Processing..." } else { "➤ Send Message" }
                                    }}
                                </button>
                            </form>
                        </div>
                    </div>

                    <div>
                        <div class="card border divider rounded-2xl p-8 shadow-sm h-full flex flex-col">
                            <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>

                            <div class="space-y-6 mb-8">
                                <div class="flex items-start">
                                    <div class="p-3 rounded-full chip-accent mr-4 mt-1">"✉"</div>
                                    <div>
                                        <h4 class="font-bold mb-1">"Email"</h4>
                                        <a
                                            href="mailto:rajanchand48@gmail.com"
                                            class="text-sm text-soft accent-hover"
                                        >
                                            "rajanchand48@gmail.com"
                                        </a>
                                    </div>
                                </div>
                                <div class="flex items-start">
                                    <div class="p-3 rounded-full chip-accent mr-4 mt-1">"📞"</div>
                                    <div>
                                        <h4 class="font-bold mb-1">"Phone"</h4>
                                        <a href="tel:+441234567890" class="text-sm text-soft accent-hover">
                                            "+44 123 456 7890"
                                        </a>
                                    </div>
                                </div>
                                <div class="flex items-start">
                                    <div class="p-3 rounded-full chip-accent mr-4 mt-1">"📍"</div>
                                    <div>
                                        <h4 class="font-bold mb-1">"Location"</h4>
                                        <p class="text-sm text-soft">"Glasgow, Scotland, United Kingdom"</p>
                                    </div>
                                </div>
                                <div class="flex items-start">
                                    <div class="p-3 rounded-full chip-accent mr-4 mt-1">"📅"</div>
                                    <div>
                                        <h4 class="font-bold mb-1">"Schedule a Meeting"</h4>
                                        <a
                                            href="https://calendly.com/rajanchand48"
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-sm text-accent hover:underline"
                                        >
                                            "Book a time slot on Calendly"
                                        </a>
                                    </div>
                                </div>
                            </div>

                            <h4 class="font-bold mb-4">"Connect with me"</h4>
                            <div class="flex gap-3">
                                <a
                                    href="https://github.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2.5 rounded-full surface surface-hover"
                                    aria-label="GitHub"
                                >
                                    <i class="devicon-github-plain"></i>
                                </a>
                                <a
                                    href="https://linkedin.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2.5 rounded-full surface surface-hover"
                                    aria-label="LinkedIn"
                                >
                                    <i class="devicon-linkedin-plain"></i>
                                </a>
                                <a
                                    href="https://twitter.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2.5 rounded-full surface surface-hover"
                                    aria-label="Twitter"
                                >
                                    <i class="devicon-twitter-original"></i>
                                </a>
                                <a
                                    href="https://youtube.com/"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2.5 rounded-full surface surface-hover"
                                    aria-label="YouTube"
                                >
                                    "▶"
                                </a>
                            </div>

                            <div class="mt-auto pt-6">
                                <iframe
                                    src=MAP_EMBED_URL
                                    width="100%"
                                    height="180"
                                    style="border: 0; border-radius: 0.5rem"
                                    loading="lazy"
                                    title="Glasgow Map"
                                    class="mt-2"
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
