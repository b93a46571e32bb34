use store::entity::{difficulty_level, quiz_exercise, research_exercise, topic};
use store::error::StoreError;
use store::models::exercise::{ExerciseKind, NewQuizQuestion};
use store::models::hackathon::NewResourceLink;
use store::service;

use crate::common::{TestDb, exercise};

fn questions() -> Vec<NewQuizQuestion> {
    vec![
        NewQuizQuestion {
            question: "What does len() return?".into(),
            answers: vec!["The length".into(), "The type".into()],
            correct_answer_index: 0,
        },
        NewQuizQuestion {
            question: "Which keyword defines a function?".into(),
            answers: vec!["func".into(), "def".into(), "fn".into()],
            correct_answer_index: 1,
        },
    ]
}

mod protect {
    use super::*;

    #[tokio::test]
    async fn topic_outlives_its_quiz_but_not_the_other_way_round() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Python", "python-topic").await;
        let level = test.difficulty("easy").await;
        let (quiz, stored) = service::exercise::create_quiz_exercise(
            &test.db,
            exercise("Basics", topic.id, level.id),
            questions(),
        )
        .await
        .unwrap();
        assert_eq!(stored.len(), 2);

        let err = service::delete(&test.db, topic::Entity, topic.id)
            .await
            .unwrap_err();
        assert!(err.is_protected(), "{err}");
        assert!(service::find(&test.db, topic::Entity, topic.id).await.is_ok());
        assert!(
            service::find(&test.db, quiz_exercise::Entity, quiz.id.clone())
                .await
                .is_ok()
        );

        service::delete(&test.db, quiz_exercise::Entity, quiz.id.clone())
            .await
            .unwrap();
        service::delete(&test.db, topic::Entity, topic.id)
            .await
            .unwrap();

        assert_eq!(test.count("topic").await, 0);
        assert_eq!(test.count("quiz_exercise_question").await, 0);
    }

    #[tokio::test]
    async fn difficulty_level_in_use_cannot_be_deleted() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Rust", "rust").await;
        let level = test.difficulty("hard").await;
        service::exercise::create_mini_exercise(&test.db, exercise("Borrowing", topic.id, level.id))
            .await
            .unwrap();

        let err = service::delete(&test.db, difficulty_level::Entity, level.id)
            .await
            .unwrap_err();

        assert!(err.is_protected(), "{err}");
        assert_eq!(test.count("difficulty_level").await, 1);
        assert_eq!(test.count("mini_exercise").await, 1);
    }

    #[tokio::test]
    async fn graded_research_keeps_its_exercise() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Security", "security").await;
        let level = test.difficulty("medium").await;
        let research = service::exercise::create_research_exercise(
            &test.db,
            exercise("Reentrancy", topic.id, level.id),
        )
        .await
        .unwrap();
        service::exercise::record_research_completion(
            &test.db,
            &research.id,
            "https://example.com/writeup",
        )
        .await
        .unwrap();

        let err = service::delete(&test.db, research_exercise::Entity, research.id.clone())
            .await
            .unwrap_err();

        assert!(err.is_protected(), "{err}");
    }

    #[tokio::test]
    async fn difficulty_level_names_are_unique() {
        let test = TestDb::spawn().await;
        test.difficulty("easy").await;

        let err = service::exercise::create_difficulty_level(&test.db, "easy")
            .await
            .unwrap_err();

        assert!(err.is_conflict(), "{err}");
    }
}

mod quizzes {
    use super::*;

    #[tokio::test]
    async fn questions_are_stored_with_the_quiz() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Python", "python-topic").await;
        let level = test.difficulty("easy").await;

        let (quiz, _) = service::exercise::create_quiz_exercise(
            &test.db,
            exercise("Basics", topic.id, level.id),
            questions(),
        )
        .await
        .unwrap();

        let stored = service::exercise::quiz_questions(&test.db, &quiz.id)
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].correct_answer(), Some("The length"));
        assert_eq!(stored[1].correct_answer(), Some("def"));
        assert_eq!(quiz.id.len(), 8);
    }

    #[tokio::test]
    async fn quiz_with_missing_topic_stores_nothing() {
        let test = TestDb::spawn().await;
        let level = test.difficulty("easy").await;

        let err = service::exercise::create_quiz_exercise(
            &test.db,
            exercise("Basics", 4242, level.id),
            questions(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StoreError::MissingReference { .. }), "{err}");
        assert_eq!(test.count("quiz_exercise").await, 0);
        assert_eq!(test.count("quiz_question").await, 0);
    }

    #[tokio::test]
    async fn invalid_answer_index_is_rejected() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Python", "python-topic").await;
        let level = test.difficulty("easy").await;
        let mut bad = questions();
        bad[1].correct_answer_index = 3;

        let err = service::exercise::create_quiz_exercise(
            &test.db,
            exercise("Basics", topic.id, level.id),
            bad,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(test.count("quiz_question").await, 0);
    }
}

mod resources {
    use super::*;

    #[tokio::test]
    async fn every_exercise_kind_takes_resources_once() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Rust", "rust").await;
        let level = test.difficulty("easy").await;
        let link = service::hackathon::create_resource_link(
            &test.db,
            NewResourceLink {
                title: "The Book".into(),
                url_extension: "the-book".into(),
                link: "https://doc.rust-lang.org/book/".into(),
            },
        )
        .await
        .unwrap();

        let project =
            service::exercise::create_project_exercise(&test.db, exercise("CLI", topic.id, level.id))
                .await
                .unwrap();
        let (quiz, _) = service::exercise::create_quiz_exercise(
            &test.db,
            exercise("Quiz", topic.id, level.id),
            questions(),
        )
        .await
        .unwrap();
        let mini =
            service::exercise::create_mini_exercise(&test.db, exercise("Mini", topic.id, level.id))
                .await
                .unwrap();
        let research = service::exercise::create_research_exercise(
            &test.db,
            exercise("Research", topic.id, level.id),
        )
        .await
        .unwrap();
        let fix = service::exercise::create_fix_the_code_exercise(
            &test.db,
            exercise("Fix", topic.id, level.id),
            "https://replit.com/@w3hacks/fix-me",
        )
        .await
        .unwrap();

        let ids = [
            (ExerciseKind::Project, project.id),
            (ExerciseKind::Quiz, quiz.id),
            (ExerciseKind::Mini, mini.id),
            (ExerciseKind::Research, research.id),
            (ExerciseKind::FixTheCode, fix.id),
        ];
        for (kind, id) in &ids {
            assert!(
                service::exercise::add_resource(&test.db, *kind, id, link.id)
                    .await
                    .unwrap()
            );
            assert!(
                !service::exercise::add_resource(&test.db, *kind, id, link.id)
                    .await
                    .unwrap()
            );
            assert_eq!(test.count(&format!("{}_resource", kind.table_name())).await, 1);
        }
    }
}

mod completions {
    use super::*;

    #[tokio::test]
    async fn fix_the_code_completion_is_scored() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Rust", "rust").await;
        let level = test.difficulty("easy").await;
        let fix = service::exercise::create_fix_the_code_exercise(
            &test.db,
            exercise("Fix", topic.id, level.id),
            "https://replit.com/@w3hacks/fix-me",
        )
        .await
        .unwrap();

        let completion = service::exercise::record_fix_the_code_completion(
            &test.db,
            &fix.id,
            "https://replit.com/@alice/fixed",
        )
        .await
        .unwrap();
        assert_eq!(completion.score, None);

        let scored =
            service::exercise::score_fix_the_code_completion(&test.db, completion.id, 90)
                .await
                .unwrap();
        assert_eq!(scored.score, Some(90));
    }

    #[tokio::test]
    async fn research_completion_is_scored() {
        let test = TestDb::spawn().await;
        let topic = test.topic("Security", "security").await;
        let level = test.difficulty("hard").await;
        let research = service::exercise::create_research_exercise(
            &test.db,
            exercise("Reentrancy", topic.id, level.id),
        )
        .await
        .unwrap();
        let completion = service::exercise::record_research_completion(
            &test.db,
            &research.id,
            "https://example.com/writeup",
        )
        .await
        .unwrap();

        let err = service::exercise::score_research_completion(&test.db, completion.id, -5)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        let scored = service::exercise::score_research_completion(&test.db, completion.id, 75)
            .await
            .unwrap();
        assert_eq!(scored.score, Some(75));
    }

    #[tokio::test]
    async fn completion_for_missing_exercise_is_a_missing_reference() {
        let test = TestDb::spawn().await;

        let err = service::exercise::record_research_completion(
            &test.db,
            "nothere0",
            "https://example.com/writeup",
        )
        .await
        .unwrap_err();

        assert!(matches!(err, StoreError::MissingReference { .. }), "{err}");
    }
}
