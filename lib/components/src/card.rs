use chrono::NaiveDate;
use const_format::concatcp;
use leptos::prelude::*;

use scrollfeed_utils::icons::{ExpandMoreIcon, FavoriteIcon, MoreVertIcon, ShareIcon};

use crate::skeleton::{Skeleton, SkeletonShape};

pub const RECIPE_TITLE: &str = "Shrimp and Chorizo Paella";
pub const RECIPE_SUMMARY: &str = "This impressive paella is a perfect party dish and a fun meal to cook together with \
    your guests. Add 1 cup of frozen peas along with the mussels, if you like.";
pub const RECIPE_METHOD: [&str; 4] = [
    "Heat 1/2 cup of the broth in a pot until simmering, add saffron and set aside for 10 minutes.",
    "Heat oil in a (14- to 16-inch) paella pan or a large, deep skillet over medium-high heat. Add chicken, shrimp and \
    chorizo, and cook, stirring occasionally until lightly browned, 6 to 8 minutes. Transfer shrimp to a large plate \
    and set aside, leaving chicken and chorizo in the pan. Add pimentón, bay leaves, garlic, tomatoes, onion, salt and \
    pepper, and cook, stirring often until thickened and fragrant, about 10 minutes. Add saffron broth and remaining \
    4 1/2 cups chicken broth; bring to a boil.",
    "Add rice and stir very gently to distribute. Top with artichokes and peppers, and cook without stirring, until most \
    of the liquid is absorbed, 15 to 18 minutes. Reduce heat to medium-low, add reserved shrimp and mussels, tucking \
    them down into the rice, and cook again without stirring, until mussels have opened and rice is just tender, 5 to 7 \
    minutes more. (Discard any mussels that don't open.)",
    "Set aside off of the heat to let rest for 10 minutes, and then serve.",
];

const ICON_BUTTON_CLASS: &str = "button-rounded-ghost";
const EXPAND_BUTTON_CLASS: &str = concatcp!(ICON_BUTTON_CLASS, " ml-auto");
const EXPAND_ICON_CLASS: &str = "card-icon-size transition duration-200";

/// Publication date of the recipe, e.g. "September 14, 2016"
pub fn recipe_date() -> String {
    NaiveDate::from_ymd_opt(2016, 9, 14)
        .map(|date| date.format("%B %d, %Y").to_string())
        .unwrap_or_default()
}

/// Demo card, renders placeholders instead of its content when `loading` is set
#[component]
pub fn RecipeCard(
    #[prop(optional)]
    loading: bool,
) -> impl IntoView {
    view! {
        <div class="recipe-card card bg-base-200 shadow-sm">
            <RecipeCardHeader loading/>
            <div class="recipe-media" title="Paella dish"/>
            <div class="card-body p-4">
            {
                match loading {
                    true => view! {
                        <div class="flex flex-col gap-1.5">
                            <Skeleton/>
                            <Skeleton class="w-[85%]"/>
                            <Skeleton/>
                            <Skeleton class="w-[30%]"/>
                        </div>
                    }.into_any(),
                    false => view! { <p class="text-sm text-base-content/70">{RECIPE_SUMMARY}</p> }.into_any(),
                }
            }
            </div>
            {(!loading).then(|| view! { <RecipeCardActions/> })}
        </div>
    }
}

#[component]
fn RecipeCardHeader(
    loading: bool,
) -> impl IntoView {
    match loading {
        true => view! {
            <div class="flex items-center gap-4 p-4">
                <Skeleton shape=SkeletonShape::Circle class="h-10 w-10"/>
                <div class="flex flex-col gap-1.5 w-full">
                    <Skeleton class="w-4/5"/>
                    <Skeleton class="w-2/5"/>
                </div>
            </div>
        }.into_any(),
        false => view! {
            <div class="flex items-center gap-4 p-4">
                <div class="avatar avatar-placeholder">
                    <div class="bg-red-500 text-white w-10 rounded-full">
                        <span>"R"</span>
                    </div>
                </div>
                <div class="flex flex-col grow">
                    <span class="text-sm">{RECIPE_TITLE}</span>
                    <span class="text-sm text-base-content/70">{recipe_date()}</span>
                </div>
                <button class=ICON_BUTTON_CLASS aria-label="settings">
                    <MoreVertIcon/>
                </button>
            </div>
        }.into_any(),
    }
}

/// Favorite and share buttons, with a toggle revealing the cooking method
#[component]
fn RecipeCardActions() -> impl IntoView {
    let expanded = RwSignal::new(false);
    let expand_icon_class = Signal::derive(move || match expanded.get() {
        true => format!("{EXPAND_ICON_CLASS} rotate-180"),
        false => String::from(EXPAND_ICON_CLASS),
    });

    view! {
        <div class="flex items-center px-2 pb-2">
            <button class=ICON_BUTTON_CLASS aria-label="add to favorites">
                <FavoriteIcon/>
            </button>
            <button class=ICON_BUTTON_CLASS aria-label="share">
                <ShareIcon/>
            </button>
            <button
                class=EXPAND_BUTTON_CLASS
                aria-expanded=move || expanded.get().to_string()
                aria-label="show more"
                on:click=move |_| expanded.update(|value| *value = !*value)
            >
                <ExpandMoreIcon class=expand_icon_class/>
            </button>
        </div>
        <Show when=move || expanded.get()>
            <div class="flex flex-col gap-3 px-4 pb-4">
                <p>"Method:"</p>
                {
                    RECIPE_METHOD.iter().map(|step| view! { <p>{*step}</p> }).collect_view()
                }
            </div>
        </Show>
    }
}
