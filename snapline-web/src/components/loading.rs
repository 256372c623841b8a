use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full animate-fadeIn">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <div class="text-xl font-medium flex items-center gap-2">
                    <i class="fas fa-camera-retro text-primary"></i>
                    <span>{"Snapline"}</span>
                </div>
                <div class="mt-3 flex items-center gap-2">
                    <span>{"Loading"}</span>
                    <span class="loading loading-dots loading-sm"></span>
                </div>
            </div>
        </div>
    }
}
