// Prompt constants for résumé screening.

/// Default job description the uploaded résumé is screened against.
/// Overridable at startup through `JOB_DESCRIPTION`.
pub const JOB_DESCRIPTION: &str = "
We are looking for a backend Java developer with at least 3 years of experience in Spring Boot microservices,
RESTful APIs, PostgreSQL, and Kafka. Experience with CI/CD pipelines and knowledge of Docker is a plus.
";

/// Screening prompt template. Replace `{job_description}` and `{resume_text}` before sending.
/// Trailing spaces on the first two lines are part of the template.
pub const SCREENING_PROMPT_TEMPLATE: &str = "Compare the following resume with the job description below. 
If the resume aligns well with the requirements, respond ONLY with: \"Shortlisted\". 
Otherwise, respond ONLY with: \"Rejected\".

Job Description:
{job_description}

Resume:
{resume_text}
";

/// Embeds the job description and résumé text in the screening template.
///
/// Both slots are filled in a single pass so placeholder-like text inside the
/// résumé is never substituted a second time.
pub fn build_screening_prompt(job_description: &str, resume_text: &str) -> String {
    let (head, rest) = SCREENING_PROMPT_TEMPLATE
        .split_once("{job_description}")
        .unwrap_or((SCREENING_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{resume_text}").unwrap_or((rest, ""));

    let mut prompt =
        String::with_capacity(SCREENING_PROMPT_TEMPLATE.len() + job_description.len() + resume_text.len());
    prompt.push_str(head);
    prompt.push_str(job_description);
    prompt.push_str(middle);
    prompt.push_str(resume_text);
    prompt.push_str(tail);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_both_inputs_in_order() {
        let prompt = build_screening_prompt("Rust engineer, 5y", "Jane Doe\nRust, Tokio");

        let jd_at = prompt.find("Job Description:\nRust engineer, 5y").unwrap();
        let resume_at = prompt.find("Resume:\nJane Doe\nRust, Tokio\n").unwrap();
        assert!(jd_at < resume_at);
        assert!(prompt.ends_with("Jane Doe\nRust, Tokio\n"));
    }

    #[test]
    fn test_prompt_names_both_verdicts() {
        let prompt = build_screening_prompt(JOB_DESCRIPTION, "");
        assert!(prompt.contains("respond ONLY with: \"Shortlisted\"."));
        assert!(prompt.contains("respond ONLY with: \"Rejected\"."));
        assert!(prompt.contains("Spring Boot microservices"));
    }

    #[test]
    fn test_placeholders_in_resume_are_left_alone() {
        let prompt = build_screening_prompt("JD", "I typed {job_description} literally");
        assert!(prompt.contains("Resume:\nI typed {job_description} literally"));
        assert_eq!(prompt.matches("JD").count(), 1);
    }

    #[test]
    fn test_template_has_no_leftover_placeholders() {
        let prompt = build_screening_prompt("JD", "CV");
        assert!(!prompt.contains("{job_description}"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
