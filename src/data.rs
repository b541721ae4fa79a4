//! Skills shown in the network, optionally overridden by the host page.

use std::collections::HashSet;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::neural_canvas::SkillCategory::{self, *};
use crate::components::neural_canvas::SkillRecord;
use crate::components::neural_canvas::config::from_json;
use crate::components::neural_canvas::error::CanvasError;

const SKILLS: &[(SkillCategory, &str, u8, &str)] = &[
	(Programming, "Python", 95, "Scripting, data analysis, ML, automation"),
	(Programming, "R", 85, "Statistical analysis, visualizations, automated reports"),
	(Programming, "SQL", 90, "Complex queries, optimization, data modeling"),
	(Programming, "Java", 80, "Backend applications, Spring Boot"),
	(Programming, "Scala", 70, "Distributed data processing with Spark"),
	(Programming, "C++", 75, "High-performance algorithms, scientific computing"),
	(Programming, "TypeScript/JavaScript", 85, "Frontend development, interactive visualizations"),
	(MlAi, "Machine Learning", 90, "Predictive models, classification, regression"),
	(MlAi, "Deep Learning", 85, "Neural networks, CNN, RNN, Transformers"),
	(MlAi, "LLM & GPT", 80, "Fine-tuning, prompt engineering, generative applications"),
	(MlAi, "Computer Vision", 75, "Image processing, object detection, segmentation"),
	(MlAi, "NLP", 85, "Text processing, sentiment analysis, NER"),
	(MlAi, "Reinforcement Learning", 65, "Q-learning, game applications"),
	(MlAi, "MLOps", 80, "Model deployment, monitoring, versioning"),
	(DataEngineering, "Apache Spark", 85, "Distributed processing, Spark SQL, Streaming"),
	(DataEngineering, "Hadoop Ecosystem", 75, "HDFS, Hive, HBase, Big Data processing"),
	(DataEngineering, "ETL/ELT", 90, "Data pipelines, integration, transformation"),
	(DataEngineering, "Airflow", 80, "Workflow orchestration, automated pipelines"),
	(DataEngineering, "Kafka", 70, "Real-time data streaming"),
	(DataEngineering, "Data Warehousing", 85, "Star/snowflake modeling, Snowflake, Redshift"),
	(DataEngineering, "Data Lakes", 80, "Lakehouse architecture, Delta Lake, Iceberg"),
	(Databases, "MySQL", 90, "Relational databases, optimization, administration"),
	(Databases, "PostgreSQL", 85, "Advanced relational databases, extensions"),
	(Databases, "MongoDB", 80, "NoSQL, document modeling"),
	(Databases, "Redis", 75, "In-memory cache, key-value stores"),
	(Databases, "Elasticsearch", 70, "Search engine, log analysis"),
	(Databases, "Neo4j", 65, "Graph databases, relationship analysis"),
	(Databases, "SQLite", 85, "Embedded databases, lightweight applications"),
	(CloudMlops, "AWS", 85, "S3, EC2, SageMaker, Lambda, AI services"),
	(CloudMlops, "Azure", 75, "Azure ML, Databricks, cognitive services"),
	(CloudMlops, "Jenkins", 70, "Build pipelines, job automation"),
	(CloudMlops, "Docker", 90, "Containerization, images, deployment"),
	(CloudMlops, "Kubernetes", 75, "Container orchestration, scaling"),
	(CloudMlops, "MLflow", 80, "Experiment tracking, model registry"),
	(CloudMlops, "CI/CD", 85, "GitHub Actions, Jenkins, deployment automation"),
	(Visualization, "Tableau", 90, "Interactive dashboards, data storytelling"),
	(Visualization, "Power BI", 85, "Enterprise reports, data models"),
	(Visualization, "Matplotlib/Seaborn", 95, "Python visualizations, exploratory analysis"),
	(Visualization, "Plotly/Dash", 80, "Interactive visualizations, web applications"),
	(Visualization, "D3.js", 70, "Advanced custom visualizations"),
	(Visualization, "Apache Superset", 75, "Open-source BI, data exploration"),
	(Visualization, "Excel Advanced", 90, "Complex models, Power Query, VBA"),
	(MathStats, "Statistics", 90, "Hypothesis testing, confidence intervals"),
	(MathStats, "Probability", 85, "Distributions, Bayes, stochastic processes"),
	(MathStats, "Linear Algebra", 80, "Matrices, decompositions, optimization"),
	(MathStats, "Calculus", 75, "Derivatives, integrals, continuous optimization"),
	(MathStats, "Optimization", 80, "Gradient methods, convexity, constraints"),
	(MathStats, "Operations Research", 70, "Discrete optimization, linear programming"),
	(MathStats, "Experimentation", 85, "A/B testing, experiment design, causality"),
];

/// The portfolio's own skills, in display order.
pub fn builtin_skills() -> Vec<SkillRecord> {
	SKILLS
		.iter()
		.map(|&(category, name, level, description)| {
			SkillRecord::new(name, level, category).with_description(description)
		})
		.collect()
}

pub fn parse_skills(json: &str) -> Result<Vec<SkillRecord>, CanvasError> {
	from_json(json)
}

/// Names that appear more than once. Such skills share hit-test and
/// selection identity, so they are reported rather than fixed.
pub fn duplicate_names(skills: &[SkillRecord]) -> Vec<&str> {
	let (mut seen, mut reported) = (HashSet::new(), HashSet::new());
	skills
		.iter()
		.map(|s| s.name.as_str())
		.filter(|name| !seen.insert(*name) && reported.insert(*name))
		.collect()
}

fn read_script(id: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let script: HtmlScriptElement = document.get_element_by_id(id)?.dyn_into().ok()?;
	script.text().ok()
}

/// Skills from a `<script id="skill-data">` JSON block when the page has
/// one, otherwise the built-in list.
pub fn load_skills() -> Vec<SkillRecord> {
	let Some(json) = read_script("skill-data") else {
		return builtin_skills();
	};
	match parse_skills(&json) {
		Ok(skills) => {
			info!("loaded {} skills from page data", skills.len());
			let dupes = duplicate_names(&skills);
			if !dupes.is_empty() {
				warn!("duplicate skill names will share identity: {dupes:?}");
			}
			skills
		}
		Err(e) => {
			warn!("failed to parse skill data, using built-in list: {e}");
			builtin_skills()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::neural_canvas::proficiency_label;

	#[test]
	fn builtin_dataset_is_well_formed() {
		let skills = builtin_skills();
		assert_eq!(skills.len(), 49);
		assert!(duplicate_names(&skills).is_empty());
		assert!(skills.iter().all(|s| s.level <= 100 && s.description.is_some()));
		for category in SkillCategory::ALL.iter().filter(|c| **c != Other) {
			assert_eq!(skills.iter().filter(|s| s.category == *category).count(), 7);
		}
	}

	#[test]
	fn parse_page_data() {
		let skills = parse_skills(
			r#"[{"name":"Rust","level":80,"category":"programming","description":"Systems"},
			    {"name":"Lean","level":20}]"#,
		)
		.unwrap();
		assert_eq!(skills[0].category, Programming);
		assert_eq!(skills[0].description.as_deref(), Some("Systems"));
		assert_eq!(skills[1].category, Other);
	}

	#[test]
	fn page_data_levels_stay_in_range() {
		let skills =
			parse_skills(r#"[{"name":"Rust","level":150,"category":"programming"}]"#).unwrap();
		assert_eq!(skills[0].level, 100);
		assert_eq!(proficiency_label(skills[0].level), "Expert");
	}

	#[test]
	fn parse_rejects_garbage() {
		assert!(parse_skills("not json").is_err());
	}

	#[test]
	fn duplicates_are_reported_once() {
		let skills = vec![
			SkillRecord::new("A", 1, Other),
			SkillRecord::new("B", 1, Other),
			SkillRecord::new("A", 2, Other),
			SkillRecord::new("B", 3, Other),
			SkillRecord::new("A", 3, Other),
		];
		assert_eq!(duplicate_names(&skills), vec!["A", "B"]);
	}
}
