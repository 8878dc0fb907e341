//! # Section Prompt Templates
//!
//! This module builds the natural-language instruction prompt for each of the
//! five case study sections. Required input fields are embedded verbatim;
//! optional fields are included only when present, so a prompt never
//! references data the caller did not supply.

use crate::types::{CaseStudyInput, SectionKind};

/// Builds the prompt for the given section kind.
pub fn build_prompt(kind: SectionKind, input: &CaseStudyInput) -> String {
    match kind {
        SectionKind::Summary => summary_prompt(input),
        SectionKind::Client => client_prompt(input),
        SectionKind::Challenges => challenges_prompt(input),
        SectionKind::Solution => solution_prompt(input),
        SectionKind::Results => results_prompt(input),
    }
}

fn push_optional(prompt: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        prompt.push_str(label);
        prompt.push_str(value);
        prompt.push('\n');
    }
}

fn summary_prompt(input: &CaseStudyInput) -> String {
    let mut prompt = format!(
        "Write a compelling summary for a case study about {} in the {} industry.\n\n\
         Main challenge: {}\n\
         Solution provided: {}\n",
        input.client_name, input.industry, input.main_challenge, input.solution_provided
    );
    push_optional(&mut prompt, "Location: ", input.location.as_deref());
    push_optional(
        &mut prompt,
        "Project scale: ",
        input.project_scale.as_deref(),
    );
    prompt.push_str(
        "\nWrite 3-4 paragraphs that:\n\
         1. Introduce the challenge in the industry context\n\
         2. Highlight why this was particularly difficult\n\
         3. Briefly mention the solution approach\n\
         4. Tease the results/benefits\n\n\
         Keep it engaging and professional. Focus on the business impact.",
    );
    prompt
}

fn client_prompt(input: &CaseStudyInput) -> String {
    let mut prompt = format!(
        "Write a professional description of the client for a case study.\n\n\
         Client: {}\n\
         Industry: {}\n",
        input.client_name, input.industry
    );
    push_optional(&mut prompt, "Location: ", input.location.as_deref());
    push_optional(
        &mut prompt,
        "Additional context: ",
        input.additional_context.as_deref(),
    );
    prompt.push_str(
        "\nWrite 2-3 paragraphs that:\n\
         1. Introduce the client and what they do\n\
         2. Provide relevant background about their business\n\
         3. Set the context for why they needed this solution\n\n\
         Make it informative but concise. Focus on details relevant to the case study.",
    );
    prompt
}

fn challenges_prompt(input: &CaseStudyInput) -> String {
    let mut prompt = format!(
        "Write a detailed challenges section for a case study.\n\n\
         Client: {}\n\
         Industry: {}\n\
         Main challenge: {}\n",
        input.client_name, input.industry, input.main_challenge
    );
    push_optional(&mut prompt, "Location: ", input.location.as_deref());
    push_optional(
        &mut prompt,
        "Project scale: ",
        input.project_scale.as_deref(),
    );
    prompt.push_str(
        "\nWrite content that:\n\
         1. Introduces the challenges with context\n\
         2. Lists 3-4 specific challenges as bullet points\n\
         3. Explains why these challenges were particularly difficult\n\
         4. Mentions any time constraints or special requirements\n\n\
         Format with a brief intro paragraph, then a bulleted list of challenges, then a concluding paragraph.\n\
         Focus on technical and business challenges that make this case study compelling.",
    );
    prompt
}

fn solution_prompt(input: &CaseStudyInput) -> String {
    let mut prompt = format!(
        "Write a detailed solution section for a case study.\n\n\
         Client: {}\n\
         Solution provided: {}\n",
        input.client_name, input.solution_provided
    );
    let technologies = input
        .technologies_used
        .as_ref()
        .filter(|t| !t.is_empty())
        .map(|t| t.join(", "));
    push_optional(&mut prompt, "Technologies used: ", technologies.as_deref());
    push_optional(
        &mut prompt,
        "Project scale: ",
        input.project_scale.as_deref(),
    );
    prompt.push_str(
        "\nWrite content that:\n\
         1. Explains the solution approach\n\
         2. Details the specific technologies or methods used\n\
         3. Lists key benefits/features as bullet points\n\
         4. Describes the implementation process\n\
         5. Mentions any partnerships or collaboration\n\n\
         Make it technical enough to be credible but accessible to business readers.\n\
         Focus on why this solution was the right choice.",
    );
    prompt
}

fn results_prompt(input: &CaseStudyInput) -> String {
    let mut prompt = format!(
        "Write a compelling results section for a case study.\n\n\
         Client: {}\n\
         Solution provided: {}\n\
         Original challenge: {}\n",
        input.client_name, input.solution_provided, input.main_challenge
    );
    prompt.push_str(
        "\nWrite content that:\n\
         1. Describes the positive outcomes achieved\n\
         2. Includes specific improvements (can be realistic but impressive)\n\
         3. Mentions implementation timeline\n\
         4. Concludes with client satisfaction\n\
         5. Includes a call-to-action paragraph for similar clients\n\n\
         Focus on measurable business benefits and user experience improvements.\n\
         End with an engaging call-to-action that encourages similar prospects to get in touch.",
    );
    prompt
}
