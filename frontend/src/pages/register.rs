use gloo_timers::callback::Timeout;
use shared::{
    Field, Language, RegistrationForm, SubmitOutcome, SuccessTicket, TransportError, input_len,
};
use wasm_bindgen::UnwrapThrowExt;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::{SuccessBanner, Toggle},
    environment::REGISTRATION_API,
    fetch, not,
};

const PASSWORD_HINT: &str = "Must be at least 8 characters with 1 uppercase, 1 lowercase, 1 digit, and 1 special character.";
const ABOUT_MAX_LEN: usize = 500;

pub struct Register {
    form: RegistrationForm,
    success_timeout: Option<Timeout>,
}

pub enum Msg {
    InputChange(Field, InputEvent),
    LangChange(Event),
    TogglePhone,
    TogglePassword,
    Submit,
    Submitted(Result<u16, TransportError>),
    DismissSuccess,
    SuccessElapsed(SuccessTicket),
}

impl Component for Register {
    type Message = Msg;
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Self {
            form: RegistrationForm::new(),
            success_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::InputChange(field, e) => {
                let value = if matches!(field, Field::About) {
                    let target: HtmlTextAreaElement = e.target_dyn_into().unwrap_throw();
                    target.value()
                } else {
                    let target: HtmlInputElement = e.target_dyn_into().unwrap_throw();
                    target.value()
                };

                self.form.set(field, value);
                true
            }
            Msg::LangChange(e) => {
                let target: HtmlSelectElement = e.target_dyn_into().unwrap_throw();
                self.form.set(Field::Lang, target.value());
                true
            }
            Msg::TogglePhone => {
                self.form.toggle_phone();
                true
            }
            Msg::TogglePassword => {
                self.form.toggle_password_visibility();
                true
            }
            Msg::Submit => {
                log::info!("submit: {:?}", self.form.data());

                let Some(data) = self.form.begin_submit() else {
                    log::warn!("submit ignored, form invalid or busy");
                    return false;
                };

                ctx.link().send_future(async move {
                    let res = fetch::submit_registration(REGISTRATION_API, &data).await;

                    Msg::Submitted(res.map_err(|e| {
                        log::error!("submit error: {e}");
                        TransportError::from(e)
                    }))
                });

                true
            }
            Msg::Submitted(result) => {
                match self.form.finish_submit(result) {
                    SubmitOutcome::Succeeded {
                        ticket,
                        dismiss_after_ms,
                    } => {
                        log::info!("registration submitted");

                        let handle = {
                            let link = ctx.link().clone();
                            Timeout::new(dismiss_after_ms, move || {
                                link.send_message(Msg::SuccessElapsed(ticket));
                            })
                        };

                        self.success_timeout = Some(handle);
                    }
                    SubmitOutcome::Failed(failure) => {
                        log::error!("registration failed: {failure:?}");
                        notify(&failure.to_string());
                    }
                    SubmitOutcome::Ignored => {
                        log::warn!("submit result without pending submit");
                    }
                }
                true
            }
            Msg::DismissSuccess => {
                self.success_timeout = None;
                self.form.dismiss_success()
            }
            Msg::SuccessElapsed(ticket) => {
                if self.form.success_window_elapsed(ticket) {
                    self.success_timeout = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="register-bg">
                <div class="register">
                    <div class="title">
                        {"Candidate Registration"}
                    </div>

                    {self.view_success(ctx)}

                    <div class="form">
                        <div class="input-box">
                            <label for="name">
                                {"Full Name"}<span class="required">{"*"}</span>
                            </label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                class={self.input_class(Field::Name)}
                                value={self.form.data().name.clone()}
                                placeholder="Your full name"
                                oninput={ctx.link().callback(|input| Msg::InputChange(Field::Name, input))}/>
                            {self.view_error(Field::Name)}
                        </div>

                        <div class="input-box">
                            <label for="email">
                                {"Email Address"}<span class="required">{"*"}</span>
                            </label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                class={self.input_class(Field::Email)}
                                value={self.form.data().email.clone()}
                                placeholder="your.email@example.com"
                                oninput={ctx.link().callback(|input| Msg::InputChange(Field::Email, input))}/>
                            {self.view_error(Field::Email)}
                        </div>

                        <Toggle
                            id="phoneToggle"
                            label="Phone Number"
                            on={self.form.show_phone()}
                            on_toggle={ctx.link().callback(|()| Msg::TogglePhone)} />

                        {self.view_phone(ctx)}

                        {self.view_password(ctx)}

                        <div class="input-box">
                            <label for="lang">
                                {"Language"}<span class="required">{"*"}</span>
                            </label>
                            <select
                                id="lang"
                                name="lang"
                                class={self.input_class(Field::Lang)}
                                onchange={ctx.link().callback(Msg::LangChange)}>
                                <option value="" selected={self.form.data().lang.is_empty()}>
                                    {"Select a language"}
                                </option>
                                { for Language::ALL.into_iter().map(|lang| self.view_language(lang)) }
                            </select>
                            {self.view_error(Field::Lang)}
                        </div>

                        <div class="input-box">
                            <label for="about">
                                {"About Yourself"}<span class="required">{"*"}</span>
                            </label>
                            <textarea
                                id="about"
                                name="about"
                                rows="5"
                                class={self.input_class(Field::About)}
                                value={self.form.data().about.clone()}
                                placeholder="Tell us about yourself (minimum 50 characters, maximum 500 characters)"
                                oninput={ctx.link().callback(|input| Msg::InputChange(Field::About, input))}>
                            </textarea>
                            {self.view_about_counter()}
                        </div>

                        <button
                            type="button"
                            class={classes!("button-submit", not(self.form.can_submit()).then_some("disabled"))}
                            disabled={!self.form.can_submit()}
                            onclick={ctx.link().callback(|_| Msg::Submit)}>
                            { if self.form.is_busy() { "Submitting..." } else { "Save" } }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

impl Register {
    fn input_class(&self, field: Field) -> Classes {
        classes!(self.form.errors().get(field).is_some().then_some("invalid"))
    }

    fn view_error(&self, field: Field) -> Html {
        self.form.errors().message(field).map_or_else(
            || html! {},
            |message| {
                html! {
                    <div class="error">{message}</div>
                }
            },
        )
    }

    fn view_success(&self, ctx: &Context<Self>) -> Html {
        if self.form.show_success() {
            html! {
                <SuccessBanner
                    text="Form submitted successfully!"
                    on_close={ctx.link().callback(|()| Msg::DismissSuccess)} />
            }
        } else {
            html! {}
        }
    }

    fn view_phone(&self, ctx: &Context<Self>) -> Html {
        if !self.form.show_phone() {
            return html! {};
        }

        html! {
            <div class="input-box">
                <label for="phone">{"Phone Number"}</label>
                <input
                    type="text"
                    id="phone"
                    name="phone"
                    class={self.input_class(Field::Phone)}
                    value={self.form.data().phone.clone()}
                    placeholder="1234567890"
                    oninput={ctx.link().callback(|input| Msg::InputChange(Field::Phone, input))}/>
                {self.view_error(Field::Phone)}
            </div>
        }
    }

    fn view_password(&self, ctx: &Context<Self>) -> Html {
        let visible = self.form.show_password();

        html! {
            <div class="input-box">
                <label for="password">
                    {"Password"}<span class="required">{"*"}</span>
                </label>
                <div class="password-box">
                    <input
                        type={if visible { "text" } else { "password" }}
                        id="password"
                        name="password"
                        class={self.input_class(Field::Password)}
                        value={self.form.data().password.clone()}
                        placeholder="Enter your password"
                        oninput={ctx.link().callback(|input| Msg::InputChange(Field::Password, input))}/>
                    <button
                        type="button"
                        class={classes!("password-eye", visible.then_some("open"))}
                        onclick={ctx.link().callback(|_| Msg::TogglePassword)}>
                        { if visible { "hide" } else { "show" } }
                    </button>
                </div>
                {self.view_error(Field::Password)}
                <div class="hint">{PASSWORD_HINT}</div>
            </div>
        }
    }

    fn view_language(&self, lang: Language) -> Html {
        html! {
            <option value={lang.code()} selected={self.form.data().lang == lang.code()}>
                {lang.label()}
            </option>
        }
    }

    fn view_about_counter(&self) -> Html {
        let message = self.form.errors().message(Field::About).unwrap_or_else(|| {
            let len = input_len(&self.form.data().about);
            format!("{len}/{ABOUT_MAX_LEN} characters")
        });

        html! {
            <div class={classes!("counter", self.form.errors().about.is_some().then_some("error"))}>
                {message}
            </div>
        }
    }
}

fn notify(message: &str) {
    if let Err(e) = gloo_utils::window().alert_with_message(message) {
        log::error!("alert error: {:?}", e);
    }
}
