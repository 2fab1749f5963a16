// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Resume generation prompt template.
/// Replace: {full_name}, {email}, {phone}, {location}, {links}, {summary},
///          {education}, {technical}, {soft}, {languages}, {experience},
///          {objective}, {format_rules}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer specialising in Tier-2/Tier-3 Indian students.
Create a concise, professional, and ATS-friendly resume in Markdown format using the information below.
Ensure all sections are clearly marked with Markdown headers.

# {full_name}
{email} | {phone} | {location}
{links}

## Professional Summary
{summary}

## Education
{education}

## Skills
**Technical Skills:** {technical}
**Soft Skills:** {soft}
**Languages:** {languages}

## Experience & Projects
{experience}

## Career Objective
{objective}

{format_rules}"#;

/// One education bullet group. Replace: {degree}, {institution}, {location},
/// {start_year}, {end_year}, {score}, {coursework}
pub const EDUCATION_ENTRY_TEMPLATE: &str = "* **{degree}** - {institution}, {location}
  * {start_year} - {end_year} | CGPA: {score}
  * Relevant Coursework: {coursework}";

/// One experience bullet group. Replace: {title}, {organization}, {start_date},
/// {end_date}, {location}, {technologies}, {description}
pub const EXPERIENCE_ENTRY_TEMPLATE: &str = "* **{title}** {organization} ({start_date} - {end_date})
  * {location}
  * Technologies: {technologies}
  * {description}";

/// Likelihood evaluation prompt. Replace: {number_only}, {resume_text}
pub const LIKELIHOOD_PROMPT_TEMPLATE: &str = r#"Given the following text, evaluate on a scale of 0 to 100 how much it resembles a professional resume.
Consider structure, content, keywords, and overall presentation.
{number_only}

Resume Text:
---
{resume_text}
---"#;

/// Offline resume used when generation fails. Replace: {full_name}, {email},
/// {phone}, {location}, {industry}
pub const FALLBACK_RESUME_TEMPLATE: &str = r#"# {full_name}
{email} | {phone} | {location}

## Professional Summary
Motivated student seeking opportunities in {industry}.

## Education
* **Degree** - Institution, Location
  * StartYear - EndYear | CGPA: N/A
  * Relevant Coursework: N/A

## Skills
**Technical Skills:** Programming, Data Structures
**Soft Skills:** Communication, Teamwork
**Languages:** English

## Experience & Projects
* **Project Title** at Organization (Start - End)
  * Location
  * Technologies: Tech1, Tech2
  * Description of project.

## Career Objective
Seeking opportunities to apply my skills and contribute to innovative projects."#;

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_PHONE: &str = "+91 9876543210";
pub const DEFAULT_LOCATION: &str = "City, State";
pub const DEFAULT_FALLBACK_LOCATION: &str = "India";
pub const DEFAULT_INDUSTRY: &str = "technology";
pub const NOT_AVAILABLE: &str = "N/A";
pub const DEFAULT_SUMMARY: &str =
    "Motivated student seeking opportunities in technology and software development.";
pub const DEFAULT_OBJECTIVE: &str =
    "Seeking opportunities to apply my skills and contribute to innovative projects.";
pub const DEFAULT_EXPERIENCE_DESCRIPTION: &str =
    "Description of responsibilities and achievements.";

/// Fills `{key}` placeholders in one pass over the template, so substituted
/// values are never themselves scanned for placeholders. Unknown keys are
/// left as written.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
