use leptos::*;

/// Plain table of pre-formatted cells
#[component]
pub fn DataTable(
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    /// Column rendered with the highlight style
    #[prop(optional)]
    highlight_column: Option<usize>,
    #[prop(default = "")] row_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table>
                <thead>
                    <tr>
                        {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|cells| {
                            view! {
                                <tr class=row_class>
                                    {cells
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, cell)| {
                                            let class = if highlight_column == Some(i) {
                                                "highlight-param"
                                            } else {
                                                ""
                                            };
                                            view! { <td class=class>{cell}</td> }
                                        })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
