//! Search result card.

use leptos::prelude::*;
use screening::Candidate;

/// One candidate, with placeholders for missing fields.
#[component]
pub fn CandidateCard(candidate: Candidate) -> impl IntoView {
    view! {
        <article class="candidate-card">
            <h3 class="candidate-card__name">"Name: " {candidate.display_name().to_owned()}</h3>
            <p class="candidate-card__line">"Experience: " {candidate.experience_line()}</p>
            <p class="candidate-card__line">"Skills: " {candidate.skills_line()}</p>
            <p class="candidate-card__line">"Education: " {candidate.education_line()}</p>
            <p class="candidate-card__line">"Certifications: " {candidate.certifications_line()}</p>
        </article>
    }
}
