use leptos::prelude::*;
use thaw::*;

/// PageHeader component - reusable header for list pages
///
/// Title on the left (with an optional record counter), actions on the right.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Number of records shown next to the title
    #[prop(optional, into)]
    count: MaybeProp<usize>,

    /// Action buttons
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <Space>
                    <h2 class="page-header__title">{title}</h2>
                    {move || count.get().map(|n| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {n.to_string()}
                        </Badge>
                    })}
                </Space>
                <Space>
                    {children()}
                </Space>
            </Flex>
        </div>
    }
}
