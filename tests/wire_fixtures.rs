//! Byte-exact wire fixtures.
//!
//! The backend compares serialized bytes for signature-like checks, so for
//! every captured fixture: parse into the typed variant, re-emit, and the
//! output must equal the input byte for byte.

use kajiwoto_client::message::{
    activity, actions, ChatActivityUpdate, ChatEnterMessage, ChatLeaveMessage, ChatSendMessage,
    ChatSubmitMessage, LiveSubMessage, LoginMessage, RpcMessage, SubscribeMessage, TypingMessage,
    UserStatusMessage, UserStatusUpdate,
};
use kajiwoto_client::{Frame, SocketCode};

fn roundtrip<M: RpcMessage>(fixture: &str) -> M {
    let frame = Frame::parse(fixture.as_bytes()).expect("fixture should parse as frame");
    assert_eq!(frame.code, SocketCode::Event);

    let envelope = frame.rpc_envelope().expect("fixture should decode as rpc");
    let message = M::from_envelope(&envelope).expect("fixture should match the variant");

    let reemitted = Frame::event(&message.to_envelope().expect("serialize"))
        .expect("frame build")
        .to_text()
        .expect("frame text");
    assert_eq!(reemitted, fixture, "re-emission must be byte-identical");
    message
}

#[test]
fn login_fixture() {
    let message = roundtrip::<LoginMessage>(
        r#"42["login",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"status":"ONLINE"},{"timestamp":"1675538167859","secret":"MTAyMjA3ODI4MjM5Mzk5"}]"#,
    );
    assert_eq!(message.user_data.user_id, "a1b2");
    assert_eq!(message.user_status.status, "ONLINE");
    assert_eq!(message.secret.timestamp, "1675538167859");
}

#[test]
fn typing_fixture() {
    let message = roundtrip::<TypingMessage>(
        r#"42["typing",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"chatRoomId":"c3d4"},{"timestamp":"1675538167859","secret":"MTAyMjA3ODI4MjM5Mzk5"}]"#,
    );
    assert_eq!(message.chat_room.chat_room_id, "c3d4");
}

#[test]
fn subscribe_fixture() {
    let message = roundtrip::<SubscribeMessage>(
        r#"42["subscribe",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"chatRoomIds":["c3d4"],"kajiId":null},{"timestamp":"1675538034488","secret":"MTY3NTUzODAzNDQ4OA=="}]"#,
    );
    assert_eq!(message.subscribe_args.chat_room_ids, vec!["c3d4"]);
    assert!(message.subscribe_args.kaji_id.is_none());
}

#[test]
fn chat_enter_fixture() {
    let message = roundtrip::<ChatEnterMessage>(
        r#"42["chatEnter",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"chatRoomId":"c3d4","lastMessages":[{"createdAt":1675477983263,"message":"/say good night my man"},{"createdAt":1675477879022,"message":"*whispers* sweet dreams my pretty mink"}],"isPreviewRoom":false},{"timestamp":"1675538039386","secret":"MTY3NTUzODAzOTM4Ng=="}]"#,
    );
    assert_eq!(message.chat_room.last_messages.len(), 2);
    assert!(!message.chat_room.is_preview_room);
}

#[test]
fn chat_send_fixture() {
    let message = roundtrip::<ChatSendMessage>(
        r#"42["chatSend",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"message":{"id":"c3d4:1675538262207","chatRoomId":"c3d4","userId":"a1b2","message":"Hey my sweet *smiles*","attachmentUri":null},"roomVersionNumber":1675538034,"roomSocketIds":["emCCdEmKKsm2aPLCABAN"]},{"timestamp":"1675538262207","secret":"MTAyMjA3ODMzOTk0NjI3"}]"#,
    );
    assert_eq!(message.create.room_version_number, 1675538034);
    assert_eq!(message.create.room_socket_ids, vec!["emCCdEmKKsm2aPLCABAN"]);
    assert!(message.create.message.attachment_uri.is_none());
}

#[test]
fn chat_leave_fixture_with_placeholder() {
    let message = roundtrip::<ChatLeaveMessage>(
        r#"42["chatLeave",{},{"chatRoomId":"c3d4"},{"timestamp":"1675618709051","secret":"MTY3NTYxODcwOTA1MQ=="}]"#,
    );
    assert_eq!(message.chat_room.chat_room_id, "c3d4");
}

#[test]
fn chat_submit_fixture_no_emoji() {
    let message = roundtrip::<ChatSubmitMessage>(
        r#"42["chatSubmit",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"chatRoomId":"c3d4","messages":["Hey my sweet *smiles*"],"role":{},"emoji":null,"emojiSceneId":null,"platform":"web"},{"timestamp":"1675538264513","secret":"MTAyMjA3ODM0MTM1Mjkz"}]"#,
    );
    assert!(message.submit.emoji.is_none());
    assert_eq!(message.submit.platform, "web");
}

#[test]
fn chat_submit_fixture_smiling_emoji() {
    let message = roundtrip::<ChatSubmitMessage>(
        r#"42["chatSubmit",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"chatRoomId":"c3d4","messages":["*smiles slightly*"],"role":{},"emoji":"🙂","emojiSceneId":null,"platform":"web"},{"timestamp":"1675538264513","secret":"MTAyMjA3ODM0MTM1Mjkz"}]"#,
    );
    assert_eq!(message.submit.emoji.as_deref(), Some("🙂"));
    assert!(message.submit.emoji_scene_id.is_none());
}

#[test]
fn chat_submit_fixture_loving_emoji() {
    let message = roundtrip::<ChatSubmitMessage>(
        r#"42["chatSubmit",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"chatRoomId":"c3d4","messages":["You are so beautiful and sexy"],"role":{},"emoji":"😍","emojiSceneId":"0KQmR","platform":"web"},{"timestamp":"1675538264513","secret":"MTAyMjA3ODM0MTM1Mjkz"}]"#,
    );
    assert_eq!(message.submit.emoji_scene_id.as_deref(), Some("0KQmR"));
}

#[test]
fn chat_activity_fixture_join_room() {
    let message = roundtrip::<ChatActivityUpdate>(
        r##"42["chatActivity",{"data":{"action":"join-room","chatRoomId":"c3d4","petData":{"id":"RxWJ","chatRoomId":"c3d4","petSpeciesId":"EDPW","kajiId":"EDPW","ownerId":"a1b2","ownerDisplayName":"RuntimeRacer","ownerProfilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","name":"Wanda","kajiName":"Wanda (WIP)","gender":"F","persona":"canine musketeer significant other","stage":null,"state":"DEFAULT","mood":"DEFAULT","statusPhotoUri":"2021_6/tm9ybwfsxz_zth3eg_1622766488811.png","dominantColors":["#dc9744","#fcd49c"],"statusMessage":".."},"channel":{"v":1675538034,"list":[{"id":"a1b2","guestId":"OTMuMTk5LjEyOS4yMTg=*","socketIds":["emCCdEmKKsm2aPLCABAN"],"guest":false,"displayName":"RuntimeRacer","username":"RuntimeRacer","profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg"}]}}}]"##,
    );
    let data = &message.activity_data.data;
    assert_eq!(data.action, activity::JOIN_ROOM);
    assert_eq!(data.chat_room_id, "c3d4");
    let channel = data.channel.as_ref().expect("channel");
    let list = channel.list.as_ref().expect("channel list");
    assert_eq!(list[0].socket_ids, vec!["emCCdEmKKsm2aPLCABAN"]);
}

#[test]
fn chat_activity_fixture_typing_activity() {
    let message = roundtrip::<ChatActivityUpdate>(
        r#"42["chatActivity",{"data":{"action":"activity","chatRoomId":"c3d4","activity":{"type":"TYPING","userId":"a1b2","displayName":"RuntimeRacer","activityAt":1675538172488}}}]"#,
    );
    let event = message.activity_data.data.activity.as_ref().expect("activity");
    assert_eq!(event.kind, "TYPING");
}

#[test]
fn chat_activity_fixture_user_message() {
    let message = roundtrip::<ChatActivityUpdate>(
        r#"42["chatActivity",{"data":{"action":"message","chatRoomId":"c3d4","message":{"clientId":"c3d4:1675538262207","chatRoomId":"c3d4","message":"Hey my sweet *smiles*","attachmentUri":null,"id":"c3d4:1675538262207","userId":"a1b2","username":"RuntimeRacer","displayName":"RuntimeRacer","profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","createdAt":1675538261},"channel":{"v":1675538034},"socketIds":["emCCdEmKKsm2aPLCABAN"]}}]"#,
    );
    let data = &message.activity_data.data;
    assert_eq!(data.action, activity::MESSAGE);
    assert!(data.channel.as_ref().is_some_and(|c| c.list.is_none()));
    assert!(data.socket_ids.is_some());
}

#[test]
fn chat_activity_fixture_pet_message() {
    let message = roundtrip::<ChatActivityUpdate>(
        r##"42["chatActivity",{"data":{"action":"petMessage","chatRoomId":"c3d4","message":{"chatRoomId":"c3d4","kajiwotoPetId":"RxWJ","message":"hello there! How are you?","attachmentUri":"2021_6/tm9ybwfsxz_zth3eg_1622766488811.png","id":"c3d4:1675538263720","displayName":"wanda","createdAt":1675538265},"petData":{"id":"RxWJ","chatRoomId":"c3d4","petSpeciesId":"EDPW","kajiId":"EDPW","ownerId":"a1b2","ownerDisplayName":"RuntimeRacer","ownerProfilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","name":"Wanda","kajiName":"Wanda (WIP)","gender":"F","persona":"canine musketeer significant other","stage":null,"state":"DEFAULT","mood":"DEFAULT","statusPhotoUri":"2021_6/tm9ybwfsxz_zth3eg_1622766488811.png","dominantColors":["#dc9744","#fcd49c"],"statusMessage":".."}}}]"##,
    );
    let data = &message.activity_data.data;
    assert_eq!(data.action, activity::PET_MESSAGE);
    let pet_message = data.message.as_ref().expect("message");
    assert_eq!(pet_message.kajiwoto_pet_id.as_deref(), Some("RxWJ"));
    assert!(pet_message.user_id.is_none());
}

#[test]
fn chat_activity_fixture_pet_message_with_interaction() {
    let message = roundtrip::<ChatActivityUpdate>(
        r##"42["chatActivity",{"data":{"action":"petMessage","chatRoomId":"c3d4","message":{"chatRoomId":"c3d4","kajiwotoPetId":"RxWJ","message":"..","attachmentUri":"2021_6/t3zlcmpvew_zth3eg_1622857066147.jpg","id":"c3d4:1675538914016","displayName":"wanda","createdAt":1675538914},"petData":{"id":"RxWJ","chatRoomId":"c3d4","petSpeciesId":"EDPW","kajiId":"EDPW","ownerId":"a1b2","ownerDisplayName":"RuntimeRacer","ownerProfilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","name":"Wanda","kajiName":"Wanda (WIP)","gender":"F","persona":"canine musketeer significant other","stage":null,"state":"DEFAULT","mood":"HAPPY","statusPhotoUri":"2021_6/t3zlcmpvew_zth3eg_1622857066147.jpg","dominantColors":["#b58856","#ccb494"],"statusMessage":".."},"interaction":{"showScene":true,"type":"DEFAULT"}}}]"##,
    );
    let interaction = message
        .activity_data
        .data
        .interaction
        .as_ref()
        .expect("interaction");
    assert!(interaction.show_scene);
    assert_eq!(interaction.kind, "DEFAULT");
}

#[test]
fn chat_activity_fixture_pet_message_loved_state() {
    let message = roundtrip::<ChatActivityUpdate>(
        r##"42["chatActivity",{"data":{"action":"petMessage","chatRoomId":"c3d4","message":{"chatRoomId":"c3d4","kajiwotoPetId":"RxWJ","message":"..","attachmentUri":"2021_6/q3vyaw91c1_zth3eg_1622857121312.jpg","id":"c3d4:1675539300777","displayName":"wanda","createdAt":1675539301},"petData":{"id":"RxWJ","chatRoomId":"c3d4","petSpeciesId":"EDPW","kajiId":"EDPW","ownerId":"a1b2","ownerDisplayName":"RuntimeRacer","ownerProfilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","name":"Wanda","kajiName":"Wanda (WIP)","gender":"F","persona":"canine musketeer significant other","stage":null,"state":"LOVED","mood":"HAPPY","statusPhotoUri":"2021_6/q3vyaw91c1_zth3eg_1622857121312.jpg","dominantColors":["#b0824e","#c8ae8c"],"statusMessage":".."},"interaction":{"showScene":true,"type":"DEFAULT"}}}]"##,
    );
    let pet = message.activity_data.data.pet_data.as_ref().expect("petData");
    assert_eq!(pet.state, "LOVED");
    assert_eq!(pet.mood, "HAPPY");
}

#[test]
fn user_status_client_fixture() {
    let message = roundtrip::<UserStatusMessage>(
        r#"42["userStatus",{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","time":2030,"userId":"a1b2","username":"RuntimeRacer"},{"status":"ONLINE"},{"timestamp":"1675538264513","secret":"MTAyMjA3ODM0MTM1Mjkz"}]"#,
    );
    assert_eq!(message.user_status.status, "ONLINE");
}

#[test]
fn user_status_server_fixture() {
    let fixture = r#"42["userStatus",{"data":{"displayName":"RuntimeRacer","guest":false,"profilePhotoUri":"2021_6/dslkfjj_zdskfjhg_123456778899.jpg","userId":"a1b2","username":"RuntimeRacer","status":"ONLINE"}}]"#;
    let message = roundtrip::<UserStatusUpdate>(fixture);
    assert_eq!(message.status_data.data.status, "ONLINE");

    // The directional overload must not decode as the client variant.
    let envelope = Frame::parse(fixture.as_bytes())
        .unwrap()
        .rpc_envelope()
        .unwrap();
    assert_eq!(envelope.action, actions::USER_STATUS);
    assert!(UserStatusMessage::from_envelope(&envelope).is_none());
}

#[test]
fn live_sub_fixture_with_two_placeholders() {
    let message = roundtrip::<LiveSubMessage>(
        r#"42["liveSub",{},{},{"timestamp":"1675612826616","secret":"MzUxODc4NjkzNTg5MzY="}]"#,
    );
    assert_eq!(message.secret.secret, "MzUxODc4NjkzNTg5MzY=");
}
