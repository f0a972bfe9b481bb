//! Tabbed clinical calculator panel for WebAssembly hosts.

pub mod form;

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use crate::form::{BmiForm, CalcTab, DoseForm, DripForm};
    use crate::styles;
    use nursepro_core::{Bmi, BmiCategory, DoseRate, DripRate, Drug, DropFactor};
    use wasm_bindgen::prelude::*;
    use web_sys::{console, Document, Element, HtmlInputElement, HtmlSelectElement, Window};
    use yew::events::{Event, InputEvent};
    use yew::prelude::*;
    use yew::TargetCast;

    #[derive(Properties, PartialEq)]
    struct NumberFieldProps {
        label: AttrValue,
        value: AttrValue,
        placeholder: AttrValue,
        oninput: Callback<InputEvent>,
        #[prop_or_default]
        helper: AttrValue,
        #[prop_or_default]
        tooltip: AttrValue,
    }

    #[function_component(NumberField)]
    fn number_field(props: &NumberFieldProps) -> Html {
        let tooltip = (!props.tooltip.is_empty()).then(|| props.tooltip.clone());
        html! {
            <label class="calc-field" title={tooltip}>
                <span class="calc-label">{ props.label.clone() }</span>
                <input
                    type="number"
                    inputmode="decimal"
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    oninput={props.oninput.clone()}
                />
                {
                    if props.helper.is_empty() {
                        Html::default()
                    } else {
                        html! { <span class="calc-helper">{ props.helper.clone() }</span> }
                    }
                }
            </label>
        }
    }

    fn text_input<S: Clone + 'static>(
        state: &UseStateHandle<S>,
        apply: fn(&mut S, String),
    ) -> Callback<InputEvent> {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*state).clone();
            apply(&mut next, input.value());
            state.set(next);
        })
    }

    #[function_component(CalculatorPanel)]
    fn calculator_panel() -> Html {
        use_effect_with((), |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    console::error_1(&err);
                }
            }
            || ()
        });

        let tab = use_state(|| CalcTab::Dose);

        html! {
            <div class="calc-root">
                <header>
                    <h2>{"Nurse Calc"}</h2>
                    <p>{"Kalkulator klinis untuk membantu presisi tindakan keperawatan."}</p>
                </header>
                <nav class="calc-tabs" role="tablist">
                    {
                        for CalcTab::ALL.into_iter().map(|item| {
                            let is_active = *tab == item;
                            let onclick = {
                                let tab = tab.clone();
                                Callback::from(move |_| tab.set(item))
                            };
                            html! {
                                <button
                                    type="button"
                                    role="tab"
                                    aria-selected={is_active.to_string()}
                                    class={classes!("calc-tab", is_active.then_some("is-active"))}
                                    onclick={onclick}
                                >
                                    { item.label() }
                                </button>
                            }
                        })
                    }
                </nav>
                <section class="calc-body">
                    {
                        match *tab {
                            CalcTab::Dose => html! { <DoseCalculator /> },
                            CalcTab::Drip => html! { <DripCalculator /> },
                            CalcTab::Bmi => html! { <BmiCalculator /> },
                        }
                    }
                </section>
            </div>
        }
    }

    #[function_component(DoseCalculator)]
    fn dose_calculator() -> Html {
        let form = use_state(DoseForm::default);
        let result = use_state(|| None::<DoseRate>);

        let on_drug = {
            let form = form.clone();
            let result = result.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                let mut next = (*form).clone();
                next.select_drug(Drug::from_id(&select.value()));
                form.set(next);
                result.set(None);
            })
        };

        let on_calculate = {
            let form = form.clone();
            let result = result.clone();
            Callback::from(move |_| result.set(form.calculate().ok()))
        };

        let drug = form.drug;
        let dose_unit = drug.dose_unit();

        html! {
            <div class="calc-form">
                <label class="calc-field">
                    <span class="calc-label">{"Pilih Rumus / Jenis Obat"}</span>
                    <select onchange={on_drug}>
                        {
                            for Drug::ALL.into_iter().map(|option| html! {
                                <option value={option.id()} selected={option == drug}>
                                    { format!("{} ({})", option.display_name(), option.dose_unit()) }
                                </option>
                            })
                        }
                    </select>
                </label>
                <NumberField
                    label={format!("Dosis Diminta ({dose_unit})")}
                    value={form.ordered.clone()}
                    placeholder="0"
                    oninput={text_input(&form, |f: &mut DoseForm, v: String| f.ordered = v)}
                    helper={format!("Contoh: 5 {dose_unit}")}
                    tooltip="Dosis yang diinstruksikan oleh dokter dalam satuan yang sesuai."
                />
                {
                    if drug.requires_weight() {
                        html! {
                            <NumberField
                                label="Berat Badan (kg)"
                                value={form.weight.clone()}
                                placeholder="0"
                                oninput={text_input(&form, |f: &mut DoseForm, v: String| f.weight = v)}
                                tooltip="Berat badan pasien, dibutuhkan untuk rumus berbasis berat badan."
                            />
                        }
                    } else {
                        Html::default()
                    }
                }
                <NumberField
                    label={format!("Sediaan Obat ({})", drug.stock_unit())}
                    value={form.stock.clone()}
                    placeholder="0"
                    oninput={text_input(&form, |f: &mut DoseForm, v: String| f.stock = v)}
                    tooltip="Kandungan obat dalam 1 ampul/vial sebelum dilarutkan."
                />
                <NumberField
                    label="Cairan Pengencer (ml)"
                    value={form.diluent.clone()}
                    placeholder="50"
                    oninput={text_input(&form, |f: &mut DoseForm, v: String| f.diluent = v)}
                    helper="Umumnya 50 ml untuk syringe pump."
                />
                <button type="button" class="calc-submit" onclick={on_calculate}>{"Hitung Kecepatan"}</button>
                { result.map(render_dose_result).unwrap_or_default() }
                { render_reference(drug) }
            </div>
        }
    }

    fn render_dose_result(rate: DoseRate) -> Html {
        html! {
            <div class="calc-result" aria-live="polite">
                <p>{"Hasil Kecepatan Syringe Pump:"}</p>
                <p class="calc-result-value">
                    { format!("{:.2}", rate.value) }
                    <span>{ format!(" {}", rate.unit.symbol()) }</span>
                </p>
                <p class="calc-helper">{"*Verifikasi kembali hasil perhitungan dengan rekan sejawat (double check)."}</p>
            </div>
        }
    }

    fn render_reference(drug: Drug) -> Html {
        let Some(profile) = drug.profile() else {
            return Html::default();
        };
        html! {
            <aside class="calc-reference">
                <h4>{"Informasi Klinis"}</h4>
                <p>{ profile.clinical_note }</p>
                <p>{"Merk: "}<strong>{ profile.market_names.join(", ") }</strong></p>
                <p>{"Sediaan: "}<strong>{ profile.preparation }</strong></p>
            </aside>
        }
    }

    #[function_component(DripCalculator)]
    fn drip_calculator() -> Html {
        let form = use_state(DripForm::default);
        let result = use_state(|| None::<DripRate>);

        let on_factor = {
            let form = form.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                let mut next = (*form).clone();
                next.factor = select
                    .value()
                    .parse::<u32>()
                    .ok()
                    .and_then(|value| DropFactor::try_from(value).ok())
                    .unwrap_or_default();
                form.set(next);
            })
        };

        let on_calculate = {
            let form = form.clone();
            let result = result.clone();
            Callback::from(move |_| result.set(form.calculate().ok()))
        };

        let factors = [
            (DropFactor::Macro20, "Makro (20 gtt/ml) - Standar"),
            (DropFactor::Macro15, "Makro (15 gtt/ml) - Khusus"),
            (DropFactor::Micro60, "Mikro (60 gtt/ml) - Pediatrik"),
        ];

        html! {
            <div class="calc-form">
                <NumberField
                    label="Volume Cairan (ml)"
                    value={form.volume.clone()}
                    placeholder="500"
                    oninput={text_input(&form, |f: &mut DripForm, v: String| f.volume = v)}
                    helper="Contoh: 500 ml RL/NS"
                />
                <NumberField
                    label="Durasi Pemberian (Jam)"
                    value={form.hours.clone()}
                    placeholder="8"
                    oninput={text_input(&form, |f: &mut DripForm, v: String| f.hours = v)}
                />
                <label class="calc-field" title="Makro: 15/20 gtt/ml (dewasa). Mikro: 60 gtt/ml (anak/drip obat).">
                    <span class="calc-label">{"Faktor Tetes (gtt/ml)"}</span>
                    <select onchange={on_factor}>
                        {
                            for factors.into_iter().map(|(factor, label)| html! {
                                <option
                                    value={factor.drops_per_ml().to_string()}
                                    selected={factor == form.factor}
                                >
                                    { label }
                                </option>
                            })
                        }
                    </select>
                </label>
                <button type="button" class="calc-submit" onclick={on_calculate}>{"Hitung Tetesan"}</button>
                { result.map(render_drip_result).unwrap_or_default() }
            </div>
        }
    }

    fn render_drip_result(rate: DripRate) -> Html {
        html! {
            <div class="calc-result" aria-live="polite">
                <p>{"Kecepatan Tetesan:"}</p>
                <p class="calc-result-value">{ format!("{:.0}", rate.headline()) }<span>{" TPM"}</span></p>
                <p class="calc-helper">{ format!("{:.1} tetes/15 dtk", rate.drops_per_quarter_minute()) }</p>
            </div>
        }
    }

    #[function_component(BmiCalculator)]
    fn bmi_calculator() -> Html {
        let form = use_state(BmiForm::default);
        let result = use_state(|| None::<Bmi>);

        let on_calculate = {
            let form = form.clone();
            let result = result.clone();
            Callback::from(move |_| result.set(form.calculate().ok()))
        };

        html! {
            <div class="calc-form">
                <NumberField
                    label="Berat Badan (kg)"
                    value={form.weight.clone()}
                    placeholder="0"
                    oninput={text_input(&form, |f: &mut BmiForm, v: String| f.weight = v)}
                />
                <NumberField
                    label="Tinggi Badan (cm)"
                    value={form.height.clone()}
                    placeholder="0"
                    oninput={text_input(&form, |f: &mut BmiForm, v: String| f.height = v)}
                />
                <button type="button" class="calc-submit" onclick={on_calculate}>{"Analisis Status Gizi"}</button>
                { result.map(render_bmi_result).unwrap_or_default() }
                <section class="calc-legend">
                    <h4>{"Klasifikasi WHO (Asia)"}</h4>
                    {
                        for BmiCategory::ALL.into_iter().skip(1).map(|category| html! {
                            <p>{ category.label() }{": "}<strong>{ category.range_label() }</strong></p>
                        })
                    }
                </section>
            </div>
        }
    }

    fn render_bmi_result(bmi: Bmi) -> Html {
        html! {
            <div class="calc-result" data-category={bmi.category.label().to_lowercase()} aria-live="polite">
                <p>{"Skor BMI Pasien:"}</p>
                <p class="calc-result-value">{ format!("{:.1}", bmi.value) }</p>
                <p><strong>{ bmi.category.label() }</strong></p>
                <p class="calc-helper">{ bmi.category.note() }</p>
            </div>
        }
    }

    #[wasm_bindgen]
    pub fn mount_calculator(selector: &str) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("cannot access document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("invalid selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("no element matches selector"))?;

        yew::Renderer::<CalculatorPanel>::with_root(target).render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_calculator;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_calculator(_: &str) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "nursepro-ui only supports the wasm32 target",
    ))
}
